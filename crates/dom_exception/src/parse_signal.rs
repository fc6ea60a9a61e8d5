//! Fatal parse signal.
//!
//! `ParseSignal` is deliberately unrelated to `DomException`: it has no name
//! or code and never touches the kind registry. Per-token recovery must
//! re-raise it instead of converting it into a diagnostic.

/// Position metadata attached to a parse failure.
///
/// All fields are optional; parsers fill in whatever they track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Locator {
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub offset: Option<usize>,
    pub system_id: Option<String>,
}

impl Locator {
    pub fn line_column(line_number: u32, column_number: u32) -> Self {
        Self {
            line_number: Some(line_number),
            column_number: Some(column_number),
            ..Self::default()
        }
    }

    pub fn offset(offset: usize) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn with_system_id(mut self, system_id: impl Into<String>) -> Self {
        self.system_id = Some(system_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.line_number.is_none()
            && self.column_number.is_none()
            && self.offset.is_none()
            && self.system_id.is_none()
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        if let Some(system_id) = &self.system_id {
            f.write_str(system_id)?;
            sep = ":";
        }
        match (self.line_number, self.column_number) {
            (Some(line), Some(column)) => write!(f, "{sep}{line}:{column}")?,
            (Some(line), None) => write!(f, "{sep}{line}")?,
            (None, _) => {
                if let Some(offset) = self.offset {
                    write!(f, "{sep}@{offset}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSignal {
    message: String,
    locator: Option<Locator>,
}

impl ParseSignal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locator: None,
        }
    }

    pub fn at(message: impl Into<String>, locator: Locator) -> Self {
        Self {
            message: message.into(),
            locator: Some(locator),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locator(&self) -> Option<&Locator> {
        self.locator.as_ref()
    }
}

impl std::fmt::Display for ParseSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.locator {
            Some(locator) if !locator.is_empty() => write!(f, "{} ({locator})", self.message),
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ParseSignal {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_available_position() {
        let signal = ParseSignal::new("unclosed root element");
        assert_eq!(signal.to_string(), "unclosed root element");

        let signal = ParseSignal::at("unexpected end", Locator::line_column(3, 14));
        assert_eq!(signal.to_string(), "unexpected end (3:14)");

        let locator = Locator::line_column(1, 2).with_system_id("doc.xml");
        let signal = ParseSignal::at("bad", locator);
        assert_eq!(signal.to_string(), "bad (doc.xml:1:2)");

        let signal = ParseSignal::at("bad", Locator::offset(42));
        assert_eq!(signal.to_string(), "bad (@42)");

        let signal = ParseSignal::at("bad", Locator::default());
        assert_eq!(signal.to_string(), "bad");
    }

    #[test]
    fn accessors_return_construction_values() {
        let locator = Locator::offset(7);
        let signal = ParseSignal::at("stop", locator.clone());
        assert_eq!(signal.message(), "stop");
        assert_eq!(signal.locator(), Some(&locator));
        assert_eq!(ParseSignal::new("stop").locator(), None);
    }
}
