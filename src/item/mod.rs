pub mod dynamic;
pub mod error;
pub mod method;
pub mod names;
pub mod script_item;
pub mod translate;
pub mod value;

pub use dynamic::DynamicObject;
pub use error::ScriptError;
pub use method::ScriptMethod;
pub use script_item::{PropertyRead, ScriptItem};
pub use value::HostValue;
