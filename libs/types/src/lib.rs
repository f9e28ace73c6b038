//! Types library for land registration fees
//!
//! This library provides the value types shared by the fee engine and the
//! gateway. Everything here is immutable reference data or plain value
//! objects; no module performs I/O.
//!
//! # Modules
//! - `ids`: Unique identifiers (ReferenceNumber)
//! - `numeric`: Fixed-point money helpers
//! - `transaction`: Transaction and property classification
//! - `exemption`: Stamp duty exemption rules
//! - `fee`: Fee schedule, calculation request and result
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod transaction;
pub mod exemption;
pub mod fee;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::transaction::*;
    pub use crate::exemption::*;
    pub use crate::fee::*;
    pub use crate::errors::*;
}
