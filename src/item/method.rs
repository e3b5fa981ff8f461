use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::item::dynamic::DynamicObject;
use crate::item::error::ScriptError;
use crate::item::script_item::ScriptItem;
use crate::item::value::HostValue;

/// A callable bound to a member name and the script item that owns it.
#[derive(Clone)]
pub struct ScriptMethod {
    target: Rc<ScriptItem>,
    name: String,
}

impl ScriptMethod {
    pub fn new(target: Rc<ScriptItem>, name: impl Into<String>) -> Self {
        ScriptMethod {
            target,
            name: name.into(),
        }
    }

    pub fn target(&self) -> &Rc<ScriptItem> {
        &self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, args: Vec<HostValue>) -> Result<HostValue, ScriptError> {
        self.target.invoke_method(&self.name, args)
    }
}

impl PartialEq for ScriptMethod {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target) && self.name == other.name
    }
}

impl Debug for ScriptMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptMethod({:?}.{})", self.target, self.name)
    }
}
