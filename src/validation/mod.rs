/// Minimal syntax check for submitted addresses: the address must contain `@`.
///
/// # Examples
/// ```
/// use email_registry::validation::syntax::is_plausible_email;
///
/// assert!(is_plausible_email("user@example.com"));
/// assert!(!is_plausible_email("not-an-email"));
/// ```
pub mod syntax;

/// Best-effort parser that recovers the email from a stored registry line.
///
/// Lines that do not end in `- <local>@<domain>.<tld>` yield `None` and are
/// ignored by the duplicate check.
pub mod extract;
