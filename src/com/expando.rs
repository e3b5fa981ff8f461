//! The late-bound target capability.
//!
//! An [`Expando`] is a handle to one object living inside a script engine.
//! Its members are only reachable by name at runtime: they can be listed,
//! looked up as a field, property or method, added, removed, and invoked
//! with positional arguments. Nothing about the object is known statically.

use std::rc::Rc;

use crate::com::error::DispatchError;
use crate::com::variant::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    name: String,
    kind: MemberKind,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        MemberInfo {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }
}

/// How a named member is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeKind {
    GetProperty,
    SetProperty,
    InvokeMethod,
}

pub trait Expando {
    /// Whether the object is backed by a native (COM) object. Only such
    /// objects are proxied when they cross into host space.
    fn is_com_object(&self) -> bool {
        true
    }

    /// All property-kind members.
    fn get_properties(&self) -> Vec<MemberInfo>;

    fn get_field(&self, name: &str) -> Option<MemberInfo>;

    fn get_property(&self, name: &str) -> Option<MemberInfo>;

    fn get_method(&self, name: &str) -> Option<MemberInfo>;

    /// Adds a generic expando field named `name`.
    fn add_property(&self, name: &str) -> Result<MemberInfo, DispatchError>;

    fn remove_member(&self, member: &MemberInfo) -> Result<(), DispatchError>;

    fn invoke_member(
        &self,
        name: &str,
        kind: InvokeKind,
        args: &[Variant],
    ) -> Result<Variant, DispatchError>;
}

pub type ExpandoRef = Rc<dyn Expando>;

/// Identity comparison of two targets (data pointer only).
pub fn same_target(a: &ExpandoRef, b: &ExpandoRef) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
