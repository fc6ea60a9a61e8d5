//! Closed set of failure signals raised by DOM operations and parsers.

use crate::exception::DomException;
use crate::parse_signal::ParseSignal;

#[derive(Clone, Debug, PartialEq)]
pub enum Failure {
    /// Invalid DOM operation; recoverable from a parser's point of view.
    Dom(DomException),
    /// Unrecoverable parse failure; must never be absorbed by recovery.
    Parse(ParseSignal),
}

impl Failure {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Failure::Parse(_))
    }

    pub fn as_dom(&self) -> Option<&DomException> {
        match self {
            Failure::Dom(err) => Some(err),
            Failure::Parse(_) => None,
        }
    }

    pub fn as_parse(&self) -> Option<&ParseSignal> {
        match self {
            Failure::Parse(signal) => Some(signal),
            Failure::Dom(_) => None,
        }
    }
}

impl From<DomException> for Failure {
    fn from(err: DomException) -> Self {
        Failure::Dom(err)
    }
}

impl From<ParseSignal> for Failure {
    fn from(signal: ParseSignal) -> Self {
        Failure::Parse(signal)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Dom(err) => std::fmt::Display::fmt(err, f),
            Failure::Parse(signal) => write!(f, "fatal parse error: {signal}"),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Failure::Dom(err) => Some(err),
            Failure::Parse(signal) => Some(signal),
        }
    }
}
