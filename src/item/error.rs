use crate::com::error::DispatchError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    /// The engine's runtime error table described the failure.
    #[error("{message}")]
    Script {
        message: String,
        #[source]
        source: DispatchError,
    },
    #[error("{0}")]
    MissingMember(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("engine '{engine}' did not run the requested operation")]
    NotExecuted { engine: String },
}

impl ScriptError {
    /// The native failure behind this error, if there is one.
    pub fn dispatch_error(&self) -> Option<&DispatchError> {
        match self {
            ScriptError::Script { source, .. } => Some(source),
            ScriptError::Dispatch(e) => Some(e),
            ScriptError::MissingMember(_) | ScriptError::NotExecuted { .. } => None,
        }
    }
}
