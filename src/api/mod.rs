use thiserror::Error;

pub mod config;

pub use crate::com::itx::*;
pub use crate::com::tbl::BasisMatrix;
pub use crate::com::*;
pub use config::*;

/*****************************************************************************
 * error codes
 *****************************************************************************/
/// Errors raised while choosing inverse transform kernels.
///
/// Transform calls themselves never fail: malformed block sizes, buffers or shifts
/// are caller bugs and panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItxError {
    #[error("unknown instruction set `{0}`, expected one of scalar, sse4.1, avx2, neon, auto")]
    UnknownIsa(String),
    #[error("instruction set {0} is not supported by this CPU")]
    UnsupportedIsa(Isa),
}
