//! The engine side of the bridge.
//!
//! Script items do not run script, schedule work or convert values. They
//! consume those services from the engine that created them:
//!
//! - **[`ScriptEngine`]**: exclusive execution, marshaling in both
//!   directions, the engine's [`Dialect`] and its runtime error table
//! - **[`EngineInternal`]**: the engine-side routines that call an item as a
//!   function or as a constructor
//! - **[`Dialect`]**: per-dialect quirks, loaded from definition files
//!
//! ```text
//! host code ──► ScriptItem ──► run_exclusive(engine, ...) ──► Expando
//!                   ▲                                            │
//!                   └──────────── marshal_to_host ◄──────────────┘
//! ```

pub mod dialect;
pub mod types;

pub use dialect::{Dialect, DialectError};
pub use types::{run_exclusive, same_engine, EngineInternal, EngineRef, ScriptEngine};
