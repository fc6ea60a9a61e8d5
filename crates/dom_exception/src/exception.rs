//! DOM exception value.
//!
//! Two calling conventions build a `DomException`:
//! - legacy-code: `(code, message)` where `code` is in `1..=LEGACY_CODE_MAX`;
//!   the name is looked up in the registry and the message is stringified.
//! - name/message: `(message, name)`; the message is kept as given and the
//!   name is accepted only if it ends in `"Error"`.
//!
//! `DomException::new` dispatches between them on the runtime type of the
//! first argument. Construction never fails: malformed input normalizes to the
//! generic `"Error"` kind.
//!
//! Invariant: the code is never stored. `code()` derives it from `name()`, so
//! the two cannot disagree.

use crate::coerce;
use crate::registry::{self, ExceptionKind, LEGACY_CODE_MAX};
use serde_json::Value;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::sync::Arc;

const ERROR_SUFFIX: &str = "Error";

#[derive(Clone, Debug)]
pub struct DomException {
    name: Cow<'static, str>,
    message: Value,
    trace: Option<Arc<Backtrace>>,
}

impl DomException {
    /// Permissive entry point accepting either calling convention.
    ///
    /// `primary` selects legacy-code mode when it is a number in
    /// `1..=LEGACY_CODE_MAX`; any other value (including `None`) is taken as
    /// the message of name/message mode. A fractional code in that range has
    /// no registry entry and yields the generic `"Error"` kind.
    pub fn new(primary: Option<Value>, secondary: Option<Value>) -> Self {
        if let Some(code) = primary.as_ref().and_then(legacy_code_arg) {
            let message = secondary
                .as_ref()
                .map(coerce::to_display_string)
                .unwrap_or_default();
            return Self::from_legacy_code(code, message);
        }
        let name = secondary.as_ref().and_then(Value::as_str);
        if name.is_none() && secondary.is_some() {
            log::trace!(
                target: "dom.exception",
                "non-string exception name {secondary:?}; using {ERROR_SUFFIX}"
            );
        }
        Self::from_name_and_message(primary.unwrap_or(Value::Null), name)
    }

    /// Legacy-code convention. Codes outside `1..=LEGACY_CODE_MAX` produce the
    /// generic `"Error"` kind.
    pub fn from_legacy_code(code: u16, message: impl Into<String>) -> Self {
        let kind = ExceptionKind::from_legacy_code(code).unwrap_or_else(|| {
            log::trace!(
                target: "dom.exception",
                "legacy code {code} out of range; using {ERROR_SUFFIX}"
            );
            ExceptionKind::Error
        });
        Self::build(Cow::Borrowed(kind.name()), Value::String(message.into()))
    }

    /// Name/message convention. The message is stored verbatim; `name` is kept
    /// only when it literally ends in `"Error"`.
    pub fn from_name_and_message(message: impl Into<Value>, name: Option<&str>) -> Self {
        Self::build(resolve_name(name), message.into())
    }

    pub fn with_kind(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self::build(Cow::Borrowed(kind.name()), Value::String(message.into()))
    }

    /// Generic `"Error"` kind with a text message.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::with_kind(ExceptionKind::Error, message)
    }

    fn build(name: Cow<'static, str>, message: Value) -> Self {
        Self {
            name,
            message,
            trace: capture_trace(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message as supplied. Legacy-code construction always yields a string.
    pub fn message(&self) -> &Value {
        &self.message
    }

    /// Message converted to text (`null` renders as `""`).
    pub fn message_str(&self) -> Cow<'_, str> {
        coerce::to_display_string(&self.message)
    }

    /// Legacy numeric code derived from the name; 0 when it has none.
    pub fn code(&self) -> u16 {
        registry::legacy_code_of(&self.name)
    }

    /// Registered kind for the name, if the name is in the registry.
    pub fn kind(&self) -> Option<ExceptionKind> {
        ExceptionKind::from_name(&self.name)
    }

    pub fn is(&self, kind: ExceptionKind) -> bool {
        self.name == kind.name()
    }

    /// Trace captured at construction, when the platform provided one.
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_deref()
    }
}

/// Equality covers name and message; the captured trace is diagnostic only.
impl PartialEq for DomException {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message
    }
}

impl std::fmt::Display for DomException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message_str();
        if message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {message}", self.name)
        }
    }
}

impl std::error::Error for DomException {}

impl From<ExceptionKind> for DomException {
    fn from(kind: ExceptionKind) -> Self {
        Self::with_kind(kind, String::new())
    }
}

/// Legacy code selected by a numeric `primary`. In-range fractions map to 0,
/// which `from_legacy_code` normalizes to the generic kind.
fn legacy_code_arg(value: &Value) -> Option<u16> {
    let number = coerce::as_f64(value)?;
    if !(1.0..=f64::from(LEGACY_CODE_MAX)).contains(&number) {
        return None;
    }
    if number.fract() == 0.0 {
        Some(number as u16)
    } else {
        log::trace!(
            target: "dom.exception",
            "fractional legacy code {number} has no kind; using {ERROR_SUFFIX}"
        );
        Some(0)
    }
}

fn resolve_name(name: Option<&str>) -> Cow<'static, str> {
    match name {
        Some(name) if name.ends_with(ERROR_SUFFIX) => match ExceptionKind::from_name(name) {
            Some(kind) => Cow::Borrowed(kind.name()),
            None => Cow::Owned(name.to_owned()),
        },
        Some(name) => {
            log::trace!(
                target: "dom.exception",
                "exception name {name:?} lacks the {ERROR_SUFFIX} suffix; using {ERROR_SUFFIX}"
            );
            Cow::Borrowed(ExceptionKind::Error.name())
        }
        None => Cow::Borrowed(ExceptionKind::Error.name()),
    }
}

#[cfg(feature = "capture-trace")]
fn capture_trace() -> Option<Arc<Backtrace>> {
    use std::backtrace::BacktraceStatus;

    let trace = Backtrace::capture();
    match trace.status() {
        BacktraceStatus::Captured => Some(Arc::new(trace)),
        _ => None,
    }
}

#[cfg(not(feature = "capture-trace"))]
fn capture_trace() -> Option<Arc<Backtrace>> {
    None
}
