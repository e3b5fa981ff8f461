pub mod error;
pub mod expando;
pub mod hresult;
pub mod variant;
