//! Turning opaque native failures into engine diagnostics.
//!
//! A failed late-bound invocation often carries nothing but a status code
//! and a generic message. The engine usually knows better: script runtime
//! errors are raised under `FACILITY_CONTROL` with the engine's own error
//! number as the sub-code, and the dialect's runtime error table maps that
//! number back to the text the script author would have seen.

use log::debug;

use crate::com::error::DispatchError;
use crate::com::hresult::{HResult, FACILITY_CONTROL};
use crate::engine::ScriptEngine;
use crate::item::error::ScriptError;

pub fn translate_invoke_error(
    engine: &dyn ScriptEngine,
    name: &str,
    error: DispatchError,
) -> ScriptError {
    if !error.is_member_lookup_failure() {
        return ScriptError::Dispatch(error);
    }

    let hr = error.hresult();
    if hr.facility() == FACILITY_CONTROL {
        if let Some(message) = engine.runtime_error_message(hr.code()) {
            debug!(
                "{}: runtime error {} ({}) invoking '{}': {}",
                engine.name(),
                hr.code(),
                hr,
                name,
                message
            );
            return ScriptError::Script {
                message: message.to_string(),
                source: error,
            };
        }
    }

    if hr == HResult::DISP_E_MEMBERNOTFOUND {
        return ScriptError::MissingMember(format!("Object has no method named '{}'", name));
    }

    ScriptError::Dispatch(error)
}
