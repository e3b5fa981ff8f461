use crate::com::hresult::HResult;

/// The shape of a failed late-bound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchErrorKind {
    /// No member with the requested name could be bound.
    MissingMember,
    /// The member exists but rejected the arguments (or the invocation mode).
    Argument,
    /// The native object returned a failure status.
    External,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({hresult})")]
pub struct DispatchError {
    kind: DispatchErrorKind,
    hresult: HResult,
    message: String,
}

impl DispatchError {
    pub fn new(kind: DispatchErrorKind, hresult: HResult, message: impl Into<String>) -> Self {
        DispatchError {
            kind,
            hresult,
            message: message.into(),
        }
    }

    pub fn missing_member(name: &str) -> Self {
        DispatchError::new(
            DispatchErrorKind::MissingMember,
            HResult::COR_E_MISSINGMEMBER,
            format!("Member '{}' not found", name),
        )
    }

    pub fn argument(message: impl Into<String>) -> Self {
        DispatchError::new(DispatchErrorKind::Argument, HResult::E_INVALIDARG, message)
    }

    pub fn external(hresult: HResult, message: impl Into<String>) -> Self {
        DispatchError::new(DispatchErrorKind::External, hresult, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        DispatchError::new(DispatchErrorKind::Other, HResult::E_FAIL, message)
    }

    pub fn kind(&self) -> DispatchErrorKind {
        self.kind
    }

    pub fn hresult(&self) -> HResult {
        self.hresult
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failures that can mean "found, but not as the requested kind of member".
    /// Reads fall back to method lookup on these and invocations try to
    /// translate them into a better diagnostic.
    pub fn is_member_lookup_failure(&self) -> bool {
        match self.kind {
            DispatchErrorKind::MissingMember
            | DispatchErrorKind::Argument
            | DispatchErrorKind::External => true,
            DispatchErrorKind::Other => false,
        }
    }
}
