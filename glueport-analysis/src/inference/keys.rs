//! Column-header → field-key derivation.

/// Derive a snake_case field key from a source column header.
///
/// Slashes, backslashes, and dashes become underscores; any other
/// non-alphanumeric punctuation is dropped; whitespace and underscore runs
/// collapse to a single underscore. Unicode letters and digits survive.
/// Pure and total: never fails, and a header with nothing usable in it
/// falls back to the literal `"field"`.
pub fn column_name_to_key(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        match ch {
            '/' | '\\' | '-' => cleaned.push('_'),
            c if c == '_' || c.is_alphanumeric() => cleaned.push(c),
            c if c.is_whitespace() => cleaned.push(' '),
            _ => {}
        }
    }

    let mut key = String::with_capacity(cleaned.len());
    let mut pending_sep = false;
    for ch in cleaned.chars() {
        if ch == ' ' || ch == '_' {
            // Runs of separators collapse; leading ones are dropped.
            pending_sep = !key.is_empty();
        } else {
            if pending_sep {
                key.push('_');
                pending_sep = false;
            }
            for lower in ch.to_lowercase() {
                key.push(lower);
            }
        }
    }

    if key.is_empty() {
        "field".to_string()
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_headers() {
        assert_eq!(column_name_to_key("Serial Number"), "serial_number");
        assert_eq!(column_name_to_key("  Operating   System  "), "operating_system");
    }

    #[test]
    fn test_punctuated_headers() {
        assert_eq!(column_name_to_key("IP/Subnet"), "ip_subnet");
        assert_eq!(column_name_to_key("Cost ($)"), "cost");
        assert_eq!(column_name_to_key("Warranty-End-Date"), "warranty_end_date");
        assert_eq!(column_name_to_key("User's Email!"), "users_email");
        assert_eq!(column_name_to_key("Path\\To\\Share"), "path_to_share");
    }

    #[test]
    fn test_unicode_headers() {
        assert_eq!(column_name_to_key("Café Standorte"), "café_standorte");
        assert_eq!(column_name_to_key("Größe (cm)"), "größe_cm");
    }

    #[test]
    fn test_degenerate_headers_fall_back() {
        assert_eq!(column_name_to_key(""), "field");
        assert_eq!(column_name_to_key("   "), "field");
        assert_eq!(column_name_to_key("!!!"), "field");
        assert_eq!(column_name_to_key("---"), "field");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for header in ["Primary Contact", "2FA Backup Codes", "___x___"] {
            assert_eq!(column_name_to_key(header), column_name_to_key(header));
        }
    }
}
