//! DOM exception taxonomy and fatal parse signal.
//!
//! `DomException` is the failure value DOM operations raise: a symbolic name,
//! a message, and a legacy numeric code derived from the name through the kind
//! registry. `ParseSignal` is a disjoint failure type that streaming parsers use
//! for conditions that must not be absorbed by per-token recovery.

pub mod exception;
pub mod failure;
pub mod legacy;
pub mod parse_signal;
pub mod registry;

mod coerce;

pub use crate::exception::DomException;
pub use crate::failure::Failure;
pub use crate::parse_signal::{Locator, ParseSignal};
pub use crate::registry::{ExceptionKind, KIND_NAMES, LEGACY_CODE_MAX};

// Re-exported so callers can build dynamically-typed constructor arguments
// without naming the dependency themselves.
pub use serde_json::Value;
