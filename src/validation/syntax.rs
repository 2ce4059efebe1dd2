/// Minimal well-formedness check applied to every submission.
///
/// The address must contain an `@` and no control characters. Line breaks in
/// particular would split one entry across several registry lines. No
/// local-part, domain or DNS validation is performed.
///
/// # Examples
/// ```
/// use email_registry::validation::syntax::is_plausible_email;
///
/// assert!(is_plausible_email("user@example.com"));
/// assert!(is_plausible_email("@"));
/// assert!(!is_plausible_email("not-an-email"));
/// assert!(!is_plausible_email("a@b.com\nforged@example.com"));
/// ```
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && !email.chars().any(char::is_control)
}
