// ssl-enum-ciphers parser - line scanner over the script's text report

use super::{ParseResult, SectionRecord};

/// Field of a version section currently receiving lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveKey {
    Ciphers,
    Compressors,
    Preference,
    Warnings,
}

impl ActiveKey {
    /// Match a field header cue. `cipher preference` is checked before
    /// `ciphers` so the longer phrase wins.
    fn from_line(line: &str) -> Option<Self> {
        if line.contains("cipher preference") {
            Some(ActiveKey::Preference)
        } else if line.contains("ciphers") {
            Some(ActiveKey::Ciphers)
        } else if line.contains("compressors") {
            Some(ActiveKey::Compressors)
        } else if line.contains("warnings") {
            Some(ActiveKey::Warnings)
        } else {
            None
        }
    }
}

/// Parse the text of one `ssl-enum-ciphers` run into per-version sections
///
/// Never fails: unrecognized lines are dropped and missing sections stay
/// absent. A version label seen twice keeps appending to the same record,
/// and the last `least strength` line wins.
pub fn parse(text: &str) -> ParseResult {
    let mut result = ParseResult::default();
    let mut current: Option<String> = None;
    let mut key: Option<ActiveKey> = None;

    for line in text.lines() {
        if line.contains("TLSv") {
            let label = line.trim().replace(':', "");
            result.sections.entry(label.clone()).or_default();
            current = Some(label);
            key = None;
            continue;
        }

        if let Some(cue) = ActiveKey::from_line(line) {
            key = Some(cue);
            if cue == ActiveKey::Preference
                && let Some(section) = current.as_ref().and_then(|v| result.sections.get_mut(v))
            {
                section.cipher_preference = preference_token(line);
            }
            continue;
        }

        if line.contains("least strength") {
            if let Some(grade) = line.split_whitespace().last() {
                result.least_strength = grade.trim().to_string();
            }
            continue;
        }

        let (Some(version), Some(active)) = (current.as_ref(), key) else {
            continue;
        };
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        if let Some(section) = result.sections.get_mut(version) {
            append_data_line(section, active, value);
        }
    }

    result
}

/// Third whitespace token of the header, e.g. `server` in
/// `cipher preference: server`. Empty when the header is too short.
fn preference_token(line: &str) -> String {
    line.trim()
        .replace(':', "")
        .split_whitespace()
        .nth(2)
        .unwrap_or_default()
        .to_string()
}

fn append_data_line(section: &mut SectionRecord, key: ActiveKey, value: &str) {
    match key {
        ActiveKey::Ciphers if !value.contains("ciphers") => section.ciphers.push(value.to_string()),
        ActiveKey::Compressors if value != "NULL" && !value.contains("compressors") => {
            section.compressors.push(value.to_string())
        }
        ActiveKey::Warnings if !value.contains("warnings") => {
            section.warnings.push(value.to_string())
        }
        _ => {}
    }
}
