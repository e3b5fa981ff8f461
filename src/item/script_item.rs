//! Script items: host-side proxies for late-bound script objects.
//!
//! A [`ScriptItem`] wraps one [`Expando`] target handed out by a script
//! engine and exposes it through [`DynamicObject`]. Every access to the
//! target runs under the engine's [`run_exclusive`] scope; results are
//! marshaled back through the engine.
//!
//! ## Holders
//!
//! When reading a member yields another item of the same engine, the
//! reader becomes that item's *holder*. Calling the result as a function
//! later passes the holder as the implicit receiver, so `obj.method` read
//! in one step and called in the next still sees `obj` as `this`. The link
//! is strong, so a chain of reads keeps every intermediate item alive for as
//! long as the last result lives.

use std::cell::RefCell;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use log::{debug, trace};
use uuid::Uuid;

use crate::com::error::DispatchErrorKind;
use crate::com::expando::{ExpandoRef, InvokeKind};
use crate::com::variant::Variant;
use crate::engine::{run_exclusive, same_engine, EngineRef};
use crate::item::dynamic::DynamicObject;
use crate::item::error::ScriptError;
use crate::item::method::ScriptMethod;
use crate::item::names::{exclude_indices, get_indices};
use crate::item::translate::translate_invoke_error;
use crate::item::value::HostValue;

/// Outcome of reading a member from a late-bound target.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyRead {
    Value(Variant),
    /// The name is not readable as a property but exists as a method.
    TearOff,
    Absent,
}

pub struct ScriptItem {
    id: Uuid,
    engine: EngineRef,
    target: ExpandoRef,
    holder: RefCell<Option<Rc<ScriptItem>>>,
}

impl ScriptItem {
    /// Proxies `value` if it is a native late-bound object; anything else is
    /// returned as is. Each call creates a new item.
    pub fn wrap(engine: &EngineRef, value: HostValue) -> HostValue {
        debug_assert!(
            !matches!(value, HostValue::Item(_) | HostValue::Method(_)),
            "value is already wrapped"
        );

        match value {
            HostValue::Null => HostValue::Null,
            HostValue::Dispatch(target) if target.is_com_object() => {
                let item = Rc::new(ScriptItem {
                    id: Uuid::new_v4(),
                    engine: engine.clone(),
                    target,
                    holder: RefCell::new(None),
                });
                trace!("{}: created script item {}", engine.name(), item.id);
                HostValue::Item(item)
            }
            other => other,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn engine(&self) -> &EngineRef {
        &self.engine
    }

    pub fn holder(&self) -> Option<Rc<ScriptItem>> {
        self.holder.borrow().clone()
    }

    /// The raw target. Callers must still go through the engine's exclusive
    /// scope to touch it.
    pub fn unwrap(&self) -> ExpandoRef {
        self.target.clone()
    }

    /// Reads `name` from the target and decides between a value, a tear-off
    /// and absence.
    pub fn probe_property(&self, name: &str) -> Result<PropertyRead, ScriptError> {
        run_exclusive(&*self.engine, || {
            match self.target.invoke_member(name, InvokeKind::GetProperty, &[]) {
                Ok(value) => Ok(PropertyRead::Value(value)),
                Err(e) if e.is_member_lookup_failure() => {
                    if self.target.get_method(name).is_some() {
                        debug!("item {}: '{}' is a method, tearing off ({})", self.id, name, e);
                        Ok(PropertyRead::TearOff)
                    } else {
                        debug!("item {}: '{}' does not exist ({})", self.id, name, e);
                        Ok(PropertyRead::Absent)
                    }
                }
                Err(e) => Err(e.into()),
            }
        })
    }
}

impl DynamicObject for Rc<ScriptItem> {
    fn get_property(&self, name: &str) -> Result<HostValue, ScriptError> {
        trace!("item {}: get '{}'", self.id, name);
        let result = match self.probe_property(name)? {
            PropertyRead::Value(value) => self.engine.marshal_to_host(value),
            PropertyRead::TearOff => HostValue::Method(ScriptMethod::new(self.clone(), name)),
            PropertyRead::Absent => HostValue::Nonexistent,
        };

        if let HostValue::Item(item) = &result {
            if same_engine(&item.engine, &self.engine) {
                trace!("item {}: holder of item {} set", self.id, item.id);
                *item.holder.borrow_mut() = Some(self.clone());
            }
        }

        Ok(result)
    }

    fn set_property(&self, name: &str, value: HostValue) -> Result<(), ScriptError> {
        trace!("item {}: set '{}'", self.id, name);
        run_exclusive(&*self.engine, || {
            let args = [self.engine.marshal_to_script(&value)];
            match self.target.invoke_member(name, InvokeKind::SetProperty, &args) {
                Ok(_) => Ok(()),
                Err(e) if e.kind() == DispatchErrorKind::MissingMember => {
                    debug!("item {}: adding member '{}'", self.id, name);
                    self.target.add_property(name)?;
                    self.target
                        .invoke_member(name, InvokeKind::SetProperty, &args)?;
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    fn delete_property(&self, name: &str) -> Result<bool, ScriptError> {
        trace!("item {}: delete '{}'", self.id, name);
        run_exclusive(&*self.engine, || {
            let member = self
                .target
                .get_field(name)
                .or_else(|| self.target.get_property(name));
            match member {
                Some(member) => {
                    self.target.remove_member(&member)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    fn get_property_names(&self) -> Result<Vec<String>, ScriptError> {
        run_exclusive(&*self.engine, || {
            let properties = self.target.get_properties();
            Ok(exclude_indices(properties.iter().map(|p| p.name())))
        })
    }

    fn get_property_indices(&self) -> Result<Vec<i32>, ScriptError> {
        run_exclusive(&*self.engine, || {
            let properties = self.target.get_properties();
            Ok(get_indices(properties.iter().map(|p| p.name())))
        })
    }

    fn invoke(&self, args: Vec<HostValue>, as_constructor: bool) -> Result<HostValue, ScriptError> {
        let internal = self.engine.engine_internal();
        if as_constructor {
            trace!("item {}: construct with {} argument(s)", self.id, args.len());
            internal.invoke_constructor(self.clone(), args)
        } else {
            let args = self.engine.dialect().adjust_invoke_args(args);
            trace!("item {}: call with {} argument(s)", self.id, args.len());
            internal.invoke_method(self.holder(), self.clone(), args)
        }
    }

    fn invoke_method(&self, name: &str, args: Vec<HostValue>) -> Result<HostValue, ScriptError> {
        trace!("item {}: invoke '{}'", self.id, name);
        let args = self.engine.dialect().adjust_invoke_args(args);
        let result = run_exclusive(&*self.engine, || {
            let marshaled: Vec<Variant> = args
                .iter()
                .map(|arg| self.engine.marshal_to_script(arg))
                .collect();
            self.target
                .invoke_member(name, InvokeKind::InvokeMethod, &marshaled)
                .map_err(|e| translate_invoke_error(&*self.engine, name, e))
        })?;
        Ok(self.engine.marshal_to_host(result))
    }
}

impl Debug for ScriptItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptItem({} @ {})", self.id, self.engine.name())
    }
}
