//! The dynamic object contract consumed by host-side dispatch machinery.

use crate::item::error::ScriptError;
use crate::item::names::index_to_name;
use crate::item::value::HostValue;

pub trait DynamicObject {
    /// Reads a member. A missing member yields [`HostValue::Nonexistent`].
    fn get_property(&self, name: &str) -> Result<HostValue, ScriptError>;

    fn set_property(&self, name: &str, value: HostValue) -> Result<(), ScriptError>;

    /// Returns `false` when there was nothing to delete.
    fn delete_property(&self, name: &str) -> Result<bool, ScriptError>;

    fn get_property_names(&self) -> Result<Vec<String>, ScriptError>;

    fn get_property_indices(&self) -> Result<Vec<i32>, ScriptError>;

    fn invoke(&self, args: Vec<HostValue>, as_constructor: bool) -> Result<HostValue, ScriptError>;

    fn invoke_method(&self, name: &str, args: Vec<HostValue>) -> Result<HostValue, ScriptError>;

    fn get_property_at(&self, index: i32) -> Result<HostValue, ScriptError> {
        self.get_property(&index_to_name(index))
    }

    fn set_property_at(&self, index: i32, value: HostValue) -> Result<(), ScriptError> {
        self.set_property(&index_to_name(index), value)
    }

    fn delete_property_at(&self, index: i32) -> Result<bool, ScriptError> {
        self.delete_property(&index_to_name(index))
    }
}
