use crate::models::entry::LINE_SEPARATOR;

/// Recovers the email from a stored registry line.
///
/// The suffix after the rightmost `" - "` is returned (trimmed) when it looks
/// like `<local>@<domain>.<tld>`, every part non-empty. Any other line yields
/// `None`; malformed history is skipped, never rejected.
///
/// # Examples
/// ```
/// use email_registry::validation::extract::extract_email;
///
/// assert_eq!(
///     extract_email("2024-05-01T12:30:45.123Z - user@example.com").as_deref(),
///     Some("user@example.com")
/// );
/// assert_eq!(extract_email("2024-05-01T12:30:45.123Z - user@localhost"), None);
/// assert_eq!(extract_email("garbage"), None);
/// ```
pub fn extract_email(line: &str) -> Option<String> {
    let (_, suffix) = line.rsplit_once(LINE_SEPARATOR)?;
    let suffix = suffix.trim();
    has_address_shape(suffix).then(|| suffix.to_string())
}

/// `.+@.+\..+` without a regex engine: some `@` with text before it, and a
/// `.` with at least one char on each side somewhere after that `@`.
fn has_address_shape(candidate: &str) -> bool {
    // Leftmost '@' after the first char leaves the widest domain to search.
    let Some(at) = candidate
        .char_indices()
        .skip(1)
        .find_map(|(i, c)| (c == '@').then_some(i))
    else {
        return false;
    };

    let domain = &candidate[at + 1..];
    domain
        .char_indices()
        .skip(1)
        .any(|(i, c)| c == '.' && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_extracts_from_well_formed_line() {
        let line = "2024-05-01T12:30:45.123Z - a@b.com";
        assert_eq!(extract_email(line).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_preserves_case() {
        let line = "2024-05-01T12:30:45.123Z - Mixed.Case@Example.COM";
        assert_eq!(extract_email(line).as_deref(), Some("Mixed.Case@Example.COM"));
    }

    #[test]
    fn test_trims_trailing_whitespace() {
        let line = "2024-05-01T12:30:45.123Z - a@b.com \r";
        assert_eq!(extract_email(line).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_uses_rightmost_separator() {
        let line = "note - old - a@b.com";
        assert_eq!(extract_email(line).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_skips_lines_without_separator() {
        assert_eq!(extract_email(""), None);
        assert_eq!(extract_email("a@b.com"), None);
        assert_eq!(extract_email("2024-05-01T12:30:45.123Z-a@b.com"), None);
    }

    #[test]
    fn test_skips_suffixes_without_address_shape() {
        for line in [
            "ts - not-an-email",
            "ts - user@localhost",
            "ts - @example.com",
            "ts - user@.com",
            "ts - user@example.",
            "ts - ",
        ] {
            assert_eq!(extract_email(line), None, "{line:?} should be skipped");
        }
    }

    #[test]
    fn test_dot_may_follow_later_at_sign() {
        assert_eq!(extract_email("ts - a@b@c.d").as_deref(), Some("a@b@c.d"));
    }

    #[test]
    fn test_round_trip_through_entry_line() {
        let entry = Entry::new("Round.Trip+tag@Example.org");
        let line = entry.to_line();
        assert!(line.trim_end().ends_with("- Round.Trip+tag@Example.org"));
        assert_eq!(extract_email(line.trim_end()), Some(entry.email));
    }
}
