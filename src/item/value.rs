use std::any::Any;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use crate::com::expando::{same_target, ExpandoRef};
use crate::item::method::ScriptMethod;
use crate::item::script_item::ScriptItem;

/// A value on the host side of the bridge.
pub enum HostValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// A late-bound object that has not been proxied.
    Dispatch(ExpandoRef),
    Item(Rc<ScriptItem>),
    /// A method torn off a script item by a property read.
    Method(ScriptMethod),
    /// Marks a member that does not exist. Not an error.
    Nonexistent,
    /// An opaque host object.
    Host(Rc<dyn Any>),
}

impl HostValue {
    pub fn is_nonexistent(&self) -> bool {
        matches!(self, HostValue::Nonexistent)
    }

    pub fn as_item(&self) -> Option<&Rc<ScriptItem>> {
        match self {
            HostValue::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&ScriptMethod> {
        match self {
            HostValue::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl Clone for HostValue {
    fn clone(&self) -> Self {
        match self {
            HostValue::Undefined => HostValue::Undefined,
            HostValue::Null => HostValue::Null,
            HostValue::Boolean(b) => HostValue::Boolean(*b),
            HostValue::Number(n) => HostValue::Number(*n),
            HostValue::String(s) => HostValue::String(s.to_string()),
            HostValue::Dispatch(d) => HostValue::Dispatch(d.clone()),
            HostValue::Item(i) => HostValue::Item(i.clone()),
            HostValue::Method(m) => HostValue::Method(m.clone()),
            HostValue::Nonexistent => HostValue::Nonexistent,
            HostValue::Host(h) => HostValue::Host(h.clone()),
        }
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::Undefined, HostValue::Undefined) => true,
            (HostValue::Null, HostValue::Null) => true,
            (HostValue::Boolean(a), HostValue::Boolean(b)) => a == b,
            (HostValue::Number(a), HostValue::Number(b)) => a == b,
            (HostValue::String(a), HostValue::String(b)) => a == b,
            (HostValue::Dispatch(a), HostValue::Dispatch(b)) => same_target(a, b),
            (HostValue::Item(a), HostValue::Item(b)) => Rc::ptr_eq(a, b),
            (HostValue::Method(a), HostValue::Method(b)) => a == b,
            (HostValue::Nonexistent, HostValue::Nonexistent) => true,
            (HostValue::Host(a), HostValue::Host(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl Debug for HostValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => write!(f, "HostValue::Undefined"),
            HostValue::Null => write!(f, "HostValue::Null"),
            HostValue::Boolean(b) => write!(f, "HostValue::Boolean({})", b),
            HostValue::Number(n) => write!(f, "HostValue::Number({})", n),
            HostValue::String(s) => write!(f, "HostValue::String({:?})", s),
            HostValue::Dispatch(_) => write!(f, "HostValue::Dispatch(...)"),
            HostValue::Item(i) => write!(f, "HostValue::Item({:?})", i),
            HostValue::Method(m) => write!(f, "HostValue::Method({:?})", m),
            HostValue::Nonexistent => write!(f, "HostValue::Nonexistent"),
            HostValue::Host(_) => write!(f, "HostValue::Host(...)"),
        }
    }
}

impl Display for HostValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => write!(f, "undefined"),
            HostValue::Null => write!(f, "null"),
            HostValue::Boolean(b) => write!(f, "{}", b),
            HostValue::Number(n) => write!(f, "{}", n),
            HostValue::String(s) => write!(f, "{}", s),
            HostValue::Dispatch(_) => write!(f, "[object]"),
            HostValue::Item(_) => write!(f, "[script item]"),
            HostValue::Method(m) => write!(f, "[method {}]", m.name()),
            HostValue::Nonexistent => write!(f, "[nonexistent]"),
            HostValue::Host(_) => write!(f, "[host object]"),
        }
    }
}
