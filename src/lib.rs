//! # script-item - host-side proxies for late-bound script objects
//!
//! Objects living inside an embedded script engine are usually reachable
//! only through a late-bound, name-based interface: members are looked up by
//! string at runtime, and the engine gives no static type to program
//! against. This crate wraps such objects in [`ScriptItem`]s so the host can
//! treat them as ordinary dynamic objects:
//!
//! - read, write and delete members by name or integer index
//! - enumerate member names and indices
//! - call the object as a function or a constructor
//! - invoke named methods
//!
//! ## Layers
//!
//! - **[`com`]** - the late-bound target capability ([`com::expando::Expando`]),
//!   engine-side values and native status codes
//! - **[`engine`]** - what an item needs from its engine: exclusive
//!   execution, marshaling, runtime support routines and the [`engine::Dialect`]
//! - **[`item`]** - the proxy itself, tear-off methods, host values and the
//!   error translation policy
//!
//! ## Behavior worth knowing
//!
//! Reading a member that does not exist is not an error: it yields
//! [`HostValue::Nonexistent`]. If the name exists as a method rather than a
//! property (VBScript cannot tell the two apart), the read yields a bound
//! [`ScriptMethod`] instead.
//!
//! Writing a member that does not exist adds it.
//!
//! Method invocation failures carrying a `FACILITY_CONTROL` status code are
//! reported with the text from the engine's runtime error table, so callers
//! see "Undefined identifier" instead of `0x800A1391`.
//!
//! ## Dialects
//!
//! ```
//! use script_item::engine::Dialect;
//!
//! let jscript = Dialect::jscript();
//! assert!(jscript.pads_empty_invoke());
//! assert_eq!(jscript.runtime_error(5009), Some("Undefined identifier"));
//!
//! let custom = Dialect::parse("[dialect \"Mini\"]\n1 = \"Oops\"\n").unwrap();
//! assert_eq!(custom[0].runtime_error(1), Some("Oops"));
//! ```

#[macro_use]
extern crate lazy_static;

pub mod com;
pub mod engine;
pub mod item;

pub use item::{DynamicObject, HostValue, ScriptError, ScriptItem, ScriptMethod};
