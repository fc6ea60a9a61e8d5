use dom_exception::{DomException, ExceptionKind, Failure, Locator, ParseSignal};

/// Diagnostic recorded by the token loop for a recoverable failure.
#[derive(Debug, PartialEq)]
struct Diagnostic {
    exception: String,
    message: String,
    offset: usize,
}

/// Minimal element-name "parser": one token per space-separated word.
///
/// - `name` is accepted,
/// - `1name` is an invalid element name (DOM exception, recoverable),
/// - `<` is an unterminated markup declaration (fatal).
fn step(word: &str, offset: usize) -> Result<String, Failure> {
    if word == "<" {
        let locator = Locator::offset(offset);
        return Err(ParseSignal::at("unterminated markup declaration", locator).into());
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(DomException::with_kind(
            ExceptionKind::InvalidCharacter,
            format!("invalid element name {word:?}"),
        )
        .into());
    }
    Ok(word.to_string())
}

/// Catch-and-continue loop: every failure except a `ParseSignal` becomes a
/// diagnostic; a `ParseSignal` is re-raised unchanged.
fn parse(
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<String>, ParseSignal> {
    let mut names = Vec::new();
    let mut offset = 0;
    for word in source.split(' ') {
        match step(word, offset) {
            Ok(name) => names.push(name),
            Err(Failure::Parse(signal)) => return Err(signal),
            Err(Failure::Dom(err)) => diagnostics.push(Diagnostic {
                exception: err.name().to_string(),
                message: err.message_str().into_owned(),
                offset,
            }),
        }
        offset += word.len() + 1;
    }
    Ok(names)
}

#[test]
fn recoverable_failures_do_not_stop_the_loop() {
    let mut diagnostics = Vec::new();
    let names = parse("html 1head body", &mut diagnostics).expect("no fatal failure");
    assert_eq!(names, ["html", "body"]);
    assert_eq!(
        diagnostics,
        [Diagnostic {
            exception: "InvalidCharacterError".to_string(),
            message: "invalid element name \"1head\"".to_string(),
            offset: 5,
        }]
    );
}

#[test]
fn fatal_signal_escapes_the_loop() {
    let mut diagnostics = Vec::new();
    let err = parse("html 1head < body", &mut diagnostics)
        .expect_err("fatal failure expected");
    assert_eq!(err.message(), "unterminated markup declaration");
    assert_eq!(err.locator(), Some(&Locator::offset(11)));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn fatal_signal_is_identified_by_type_not_message() {
    let dom: Failure = DomException::with_kind(ExceptionKind::Syntax, "fatal").into();
    let parse: Failure = ParseSignal::new("fatal").into();
    assert!(!dom.is_fatal());
    assert!(parse.is_fatal());
    assert_eq!(dom.as_dom().map(DomException::code), Some(12));
    assert!(parse.as_dom().is_none());
}
