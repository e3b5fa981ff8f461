#![allow(dead_code)]

extern crate script_item;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use script_item::com::error::DispatchError;
use script_item::com::expando::{Expando, ExpandoRef, InvokeKind, MemberInfo, MemberKind};
use script_item::com::hresult::HResult;
use script_item::com::variant::Variant;
use script_item::engine::{Dialect, EngineInternal, EngineRef, ScriptEngine};
use script_item::{HostValue, ScriptError, ScriptItem};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ── Mock late-bound object ───────────────────────────────────────────

pub type MethodFn = Rc<dyn Fn(&[Variant]) -> Result<Variant, DispatchError>>;

enum Slot {
    Field(Variant),
    Property(Variant),
    Method(MethodFn),
}

struct Member {
    name: String,
    slot: Slot,
}

/// An in-memory expando object. Reading a method as a property fails the way
/// VBScript does, with `DISP_E_MEMBERNOTFOUND`.
pub struct MockObject {
    members: RefCell<Vec<Member>>,
    com: bool,
    reject_adds: bool,
    get_failures: RefCell<HashMap<String, DispatchError>>,
    calls: RefCell<Vec<String>>,
    last_args: RefCell<Vec<Variant>>,
}

impl MockObject {
    pub fn new() -> Self {
        MockObject {
            members: RefCell::new(vec![]),
            com: true,
            reject_adds: false,
            get_failures: RefCell::new(HashMap::new()),
            calls: RefCell::new(vec![]),
            last_args: RefCell::new(vec![]),
        }
    }

    pub fn with_field(self, name: &str, value: Variant) -> Self {
        self.push(name, Slot::Field(value));
        self
    }

    pub fn with_property(self, name: &str, value: Variant) -> Self {
        self.push(name, Slot::Property(value));
        self
    }

    pub fn with_method<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&[Variant]) -> Result<Variant, DispatchError> + 'static,
    {
        self.push(name, Slot::Method(Rc::new(f)));
        self
    }

    pub fn non_com(mut self) -> Self {
        self.com = false;
        self
    }

    pub fn rejecting_adds(mut self) -> Self {
        self.reject_adds = true;
        self
    }

    pub fn fail_get_with(&self, name: &str, error: DispatchError) {
        self.get_failures.borrow_mut().insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_args(&self) -> Vec<Variant> {
        self.last_args.borrow().clone()
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.borrow().iter().any(|m| m.name == name)
    }

    fn push(&self, name: &str, slot: Slot) {
        self.members.borrow_mut().push(Member {
            name: name.to_string(),
            slot,
        });
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn find(&self, name: &str, kind: MemberKind) -> Option<MemberInfo> {
        self.members
            .borrow()
            .iter()
            .find(|m| {
                m.name == name
                    && match (&m.slot, kind) {
                        (Slot::Field(_), MemberKind::Field) => true,
                        (Slot::Property(_), MemberKind::Property) => true,
                        (Slot::Method(_), MemberKind::Method) => true,
                        _ => false,
                    }
            })
            .map(|m| MemberInfo::new(m.name.clone(), kind))
    }
}

fn member_not_found() -> DispatchError {
    DispatchError::external(HResult::DISP_E_MEMBERNOTFOUND, "Member not found.")
}

impl Expando for MockObject {
    fn is_com_object(&self) -> bool {
        self.com
    }

    fn get_properties(&self) -> Vec<MemberInfo> {
        self.members
            .borrow()
            .iter()
            .filter(|m| !matches!(m.slot, Slot::Method(_)))
            .map(|m| MemberInfo::new(m.name.clone(), MemberKind::Property))
            .collect()
    }

    fn get_field(&self, name: &str) -> Option<MemberInfo> {
        self.find(name, MemberKind::Field)
    }

    fn get_property(&self, name: &str) -> Option<MemberInfo> {
        self.find(name, MemberKind::Property)
    }

    fn get_method(&self, name: &str) -> Option<MemberInfo> {
        self.find(name, MemberKind::Method)
    }

    fn add_property(&self, name: &str) -> Result<MemberInfo, DispatchError> {
        self.record(format!("add {}", name));
        if self.reject_adds {
            return Err(DispatchError::other("object is not extensible"));
        }
        self.push(name, Slot::Field(Variant::Empty));
        Ok(MemberInfo::new(name, MemberKind::Field))
    }

    fn remove_member(&self, member: &MemberInfo) -> Result<(), DispatchError> {
        self.record(format!("remove {}", member.name()));
        let mut members = self.members.borrow_mut();
        match members.iter().position(|m| m.name == member.name()) {
            Some(pos) => {
                members.remove(pos);
                Ok(())
            }
            None => Err(DispatchError::missing_member(member.name())),
        }
    }

    fn invoke_member(
        &self,
        name: &str,
        kind: InvokeKind,
        args: &[Variant],
    ) -> Result<Variant, DispatchError> {
        self.record(format!("{:?} {}", kind, name));
        *self.last_args.borrow_mut() = args.to_vec();

        if kind == InvokeKind::GetProperty {
            if let Some(error) = self.get_failures.borrow().get(name) {
                return Err(error.clone());
            }
        }

        let method = {
            let mut members = self.members.borrow_mut();
            let member = match members.iter_mut().find(|m| m.name == name) {
                Some(member) => member,
                None => {
                    return match kind {
                        InvokeKind::InvokeMethod => Err(member_not_found()),
                        _ => Err(DispatchError::missing_member(name)),
                    }
                }
            };
            let method = match (&mut member.slot, kind) {
                (Slot::Field(v), InvokeKind::GetProperty)
                | (Slot::Property(v), InvokeKind::GetProperty) => return Ok(v.clone()),
                (Slot::Field(v), InvokeKind::SetProperty)
                | (Slot::Property(v), InvokeKind::SetProperty) => {
                    *v = args.first().cloned().unwrap_or(Variant::Empty);
                    return Ok(Variant::Empty);
                }
                (Slot::Method(f), InvokeKind::InvokeMethod) => f.clone(),
                (Slot::Method(_), InvokeKind::GetProperty) => return Err(member_not_found()),
                (Slot::Method(_), InvokeKind::SetProperty) => {
                    return Err(DispatchError::argument("cannot assign to a method"))
                }
                (_, InvokeKind::InvokeMethod) => return Err(member_not_found()),
            };
            method
        };
        (*method)(args)
    }
}

// ── Mock engine ──────────────────────────────────────────────────────

pub struct Invocation {
    pub receiver: Option<Rc<ScriptItem>>,
    pub callee: Rc<ScriptItem>,
    pub args: Vec<HostValue>,
    pub as_constructor: bool,
}

pub struct MockEngine {
    name: String,
    dialect: Dialect,
    self_ref: Weak<MockEngine>,
    busy: Cell<bool>,
    runs: Cell<usize>,
    skip_work: Cell<bool>,
    wrap_with: RefCell<Option<EngineRef>>,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockEngine {
    pub fn new(name: &str, dialect: Dialect) -> Rc<MockEngine> {
        Rc::new_cyclic(|self_ref| MockEngine {
            name: name.to_string(),
            dialect,
            self_ref: self_ref.clone(),
            busy: Cell::new(false),
            runs: Cell::new(0),
            skip_work: Cell::new(false),
            wrap_with: RefCell::new(None),
            invocations: RefCell::new(vec![]),
        })
    }

    pub fn jscript() -> Rc<MockEngine> {
        MockEngine::new("jscript", Dialect::jscript().clone())
    }

    pub fn vbscript() -> Rc<MockEngine> {
        MockEngine::new("vbscript", Dialect::vbscript().clone())
    }

    /// Late-bound objects marshaled by this engine get wrapped for `other`.
    pub fn wrap_objects_for(&self, other: EngineRef) {
        *self.wrap_with.borrow_mut() = Some(other);
    }

    pub fn skip_work(&self) {
        self.skip_work.set(true);
    }

    pub fn runs(&self) -> usize {
        self.runs.get()
    }

    pub fn take_invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow_mut().drain(..).collect()
    }

    fn engine_ref(&self) -> EngineRef {
        if let Some(other) = self.wrap_with.borrow().as_ref() {
            return other.clone();
        }
        self.self_ref.upgrade().expect("engine dropped while in use")
    }

    fn record(
        &self,
        receiver: Option<Rc<ScriptItem>>,
        callee: Rc<ScriptItem>,
        args: Vec<HostValue>,
        as_constructor: bool,
    ) {
        self.invocations.borrow_mut().push(Invocation {
            receiver,
            callee,
            args,
            as_constructor,
        });
    }
}

impl ScriptEngine for MockEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    fn script_invoke(&self, work: &mut dyn FnMut()) {
        assert!(!self.busy.get(), "engine entered concurrently");
        self.runs.set(self.runs.get() + 1);
        if self.skip_work.get() {
            return;
        }
        self.busy.set(true);
        work();
        self.busy.set(false);
    }

    fn marshal_to_host(&self, value: Variant) -> HostValue {
        match value {
            Variant::Empty => HostValue::Undefined,
            Variant::Null => HostValue::Null,
            Variant::Bool(b) => HostValue::Boolean(b),
            Variant::I4(i) => HostValue::Number(i as f64),
            Variant::R8(r) => HostValue::Number(r),
            Variant::BStr(s) => HostValue::String(s),
            Variant::Dispatch(d) => ScriptItem::wrap(&self.engine_ref(), HostValue::Dispatch(d)),
        }
    }

    fn marshal_to_script(&self, value: &HostValue) -> Variant {
        match value {
            HostValue::Undefined => Variant::Empty,
            HostValue::Null => Variant::Null,
            HostValue::Boolean(b) => Variant::Bool(*b),
            HostValue::Number(n) if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 => {
                Variant::I4(*n as i32)
            }
            HostValue::Number(n) => Variant::R8(*n),
            HostValue::String(s) => Variant::BStr(s.clone()),
            HostValue::Dispatch(d) => Variant::Dispatch(d.clone()),
            HostValue::Item(item) => Variant::Dispatch(item.unwrap()),
            HostValue::Method(_) | HostValue::Nonexistent | HostValue::Host(_) => Variant::Empty,
        }
    }

    fn engine_internal(&self) -> &dyn EngineInternal {
        self
    }
}

impl EngineInternal for MockEngine {
    fn invoke_method(
        &self,
        receiver: Option<Rc<ScriptItem>>,
        callee: Rc<ScriptItem>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, ScriptError> {
        self.record(receiver, callee, args, false);
        Ok(HostValue::Undefined)
    }

    fn invoke_constructor(
        &self,
        callee: Rc<ScriptItem>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, ScriptError> {
        let instance: ExpandoRef = Rc::new(MockObject::new());
        self.record(None, callee, args, true);
        Ok(HostValue::Dispatch(instance))
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

pub fn as_engine_ref(engine: &Rc<MockEngine>) -> EngineRef {
    engine.clone()
}

/// Wraps `object` for `engine`, panicking if it is not proxied.
pub fn item_for(engine: &Rc<MockEngine>, object: &Rc<MockObject>) -> Rc<ScriptItem> {
    let target: ExpandoRef = object.clone();
    match ScriptItem::wrap(&as_engine_ref(engine), HostValue::Dispatch(target)) {
        HostValue::Item(item) => item,
        other => panic!("expected a script item, got {:?}", other),
    }
}
