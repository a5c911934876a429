//! Static pattern tables for column-name and value classification.
//!
//! Compiled once at first use; the inference hot path only runs matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Column-name patterns that force the totp type.
///
/// Checked before the password patterns: TOTP columns routinely contain
/// the word "secret" and would otherwise be classified as passwords.
pub static TOTP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)otp",
        r"(?i)totp",
        r"(?i)mfa",
        r"(?i)2fa",
        r"(?i)two[\s_-]?factor",
    ])
});

/// Column-name patterns that force the password type.
pub static PASSWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)password",
        r"(?i)secret",
        r"(?i)key",
        r"(?i)credential",
        r"(?i)token",
    ])
});

/// Accepted date/datetime shapes.
///
/// The US and EU slash patterns are textually identical on purpose: the
/// importer has always accepted both under one permissive shape.
// TODO: add day-first disambiguation (day > 12) for EU exports once the
// importer decides how region is signalled.
pub static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // ISO date: 2024-01-31
        r"^\d{4}-\d{2}-\d{2}$",
        // US slash date: 1/31/2024
        r"^\d{1,2}/\d{1,2}/\d{4}$",
        // EU slash date: 31/1/2024
        r"^\d{1,2}/\d{1,2}/\d{4}$",
        // ISO datetime: 2024-01-31T09:30[:00]
        r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2})?",
        // US datetime: 1/31/2024 9:30[:00] [AM]
        r"^\d{1,2}/\d{1,2}/\d{4}\s+\d{1,2}:\d{2}(:\d{2})?(\s*[AaPp][Mm])?$",
        // Slash-separated year-first date: 2024/1/31
        r"^\d{4}/\d{1,2}/\d{1,2}$",
        // Dash-separated day-first date: 31-1-2024
        r"^\d{1,2}-\d{1,2}-\d{4}$",
    ])
});

/// Anything that looks like a markup tag.
pub static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("Invalid regex pattern"));

/// Literals accepted as boolean values, case-insensitive.
const BOOLEAN_LITERALS: [&str; 10] = [
    "true", "yes", "1", "on", "enabled", "false", "no", "0", "off", "disabled",
];

/// Whether `value` is a recognized boolean literal.
pub fn is_boolean_literal(value: &str) -> bool {
    let lowered = value.to_lowercase();
    BOOLEAN_LITERALS.contains(&lowered.as_str())
}

/// Whether `value` matches any accepted date shape.
pub fn is_date_value(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|p| p.is_match(value))
}

/// Whether any pattern in `patterns` matches `text`.
pub fn matches_any(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|s| Regex::new(s).expect("Invalid regex pattern"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totp_names_match() {
        for name in ["TOTP Secret", "2FA Code", "MFA Seed", "Two-Factor Key", "Two Factor"] {
            assert!(matches_any(&TOTP_PATTERNS, name), "{name}");
        }
    }

    #[test]
    fn test_password_names_match() {
        for name in ["Password", "Admin Secret", "API Key", "Login Credential", "Access Token"] {
            assert!(matches_any(&PASSWORD_PATTERNS, name), "{name}");
        }
        assert!(!matches_any(&PASSWORD_PATTERNS, "Hostname"));
    }

    #[test]
    fn test_date_shapes() {
        for value in [
            "2024-01-31",
            "1/31/2024",
            "31/1/2024",
            "2024-01-31T09:30",
            "2024-01-31 09:30:00",
            "1/31/2024 9:30 AM",
            "2024/1/31",
            "31-1-2024",
        ] {
            assert!(is_date_value(value), "{value}");
        }
        for value in ["tomorrow", "2024-1-31", "31.01.2024", "202401"] {
            assert!(!is_date_value(value), "{value}");
        }
    }

    #[test]
    fn test_boolean_literals() {
        for value in ["true", "Yes", "1", "ON", "Disabled"] {
            assert!(is_boolean_literal(value), "{value}");
        }
        for value in ["2", "maybe", ""] {
            assert!(!is_boolean_literal(value), "{value}");
        }
    }
}
