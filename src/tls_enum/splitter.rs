// Report splitter - decides whether a port's script output carries data

use super::{ParseResult, TlsVersions, parse};

/// Outcome of handing one port's script output to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptReport {
    /// No script output was attached to the port
    NoData,
    /// Output was present; the result may still be empty
    Parsed(ParseResult),
}

impl ScriptReport {
    pub fn has_data(&self) -> bool {
        matches!(self, ScriptReport::Parsed(_))
    }

    pub fn into_result(self) -> ParseResult {
        match self {
            ScriptReport::NoData => ParseResult::default(),
            ScriptReport::Parsed(result) => result,
        }
    }

    /// Project into the fixed four-version shape
    pub fn to_versions(&self) -> TlsVersions {
        match self {
            ScriptReport::NoData => TlsVersions::default(),
            ScriptReport::Parsed(result) => TlsVersions::from(result),
        }
    }
}

/// Route one port's script output to the section parser
///
/// Absent or empty output is reported as [`ScriptReport::NoData`] rather
/// than as an error; anything else is parsed verbatim.
pub fn split_report(output: Option<&str>) -> ScriptReport {
    match output {
        Some(text) if !text.is_empty() => ScriptReport::Parsed(parse(text)),
        _ => ScriptReport::NoData,
    }
}
