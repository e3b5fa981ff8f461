//! The engine collaborator contract.

use std::rc::Rc;

use crate::com::variant::Variant;
use crate::engine::dialect::Dialect;
use crate::item::error::ScriptError;
use crate::item::script_item::ScriptItem;
use crate::item::value::HostValue;

/// A script engine as seen by the items it hands out.
///
/// Engines are not safe for concurrent entry. Every operation that touches a
/// late-bound object goes through [`ScriptEngine::script_invoke`], which is
/// where an implementation enforces exclusivity, thread affinity, timeouts
/// and the like. Items never lock anything themselves.
pub trait ScriptEngine {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn dialect(&self) -> &Dialect;

    /// Runs `work` once, with exclusive access to the engine, before
    /// returning. Use [`run_exclusive`] to get a value out.
    fn script_invoke(&self, work: &mut dyn FnMut());

    /// Converts an engine value for the host. Late-bound objects are expected
    /// to pass through [`ScriptItem::wrap`].
    fn marshal_to_host(&self, value: Variant) -> HostValue;

    fn marshal_to_script(&self, value: &HostValue) -> Variant;

    fn engine_internal(&self) -> &dyn EngineInternal;

    fn runtime_error_message(&self, code: u16) -> Option<&str> {
        self.dialect().runtime_error(code)
    }
}

/// Runtime support routines that live inside the engine.
///
/// Native late-bound objects have no uniform "call me" verb, so calling an
/// item as a function or constructor is delegated to the engine, which
/// knows how its own function objects are invoked.
pub trait EngineInternal {
    fn invoke_method(
        &self,
        receiver: Option<Rc<ScriptItem>>,
        callee: Rc<ScriptItem>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, ScriptError>;

    fn invoke_constructor(
        &self,
        callee: Rc<ScriptItem>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, ScriptError>;
}

pub type EngineRef = Rc<dyn ScriptEngine>;

pub fn same_engine(a: &EngineRef, b: &EngineRef) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Runs `work` under [`ScriptEngine::script_invoke`] and hands back its result.
pub fn run_exclusive<T, F>(engine: &dyn ScriptEngine, work: F) -> Result<T, ScriptError>
where
    F: FnOnce() -> Result<T, ScriptError>,
{
    let mut work = Some(work);
    let mut result = None;
    engine.script_invoke(&mut || {
        if let Some(work) = work.take() {
            result = Some(work());
        }
    });
    result.unwrap_or_else(|| {
        Err(ScriptError::NotExecuted {
            engine: engine.name().to_string(),
        })
    })
}
