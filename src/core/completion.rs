//! Tab completion for command names.
//!
//! Completion matches the whole input buffer as a literal prefix of a
//! registered name, so it only applies while the buffer still represents a
//! single partial command. The policy is deliberately minimal: a unique
//! candidate rewrites the buffer, anything else leaves it untouched.
//!
//! [`hint`] supplements Tab completion with a ghost-text suffix shown while
//! typing; it never rewrites the buffer.

/// Complete `buffer` against the registered `names`.
///
/// Returns the replacement buffer when exactly one name has `buffer` as a
/// literal prefix (no trailing space is added). Zero or multiple candidates,
/// or an empty buffer, return `None` and the caller leaves the buffer alone.
pub fn complete(buffer: &str, names: &[&str]) -> Option<String> {
    if buffer.is_empty() {
        return None;
    }

    let mut candidates = names.iter().filter(|name| name.starts_with(buffer));
    let first = candidates.next()?;
    match candidates.next() {
        None => Some((*first).to_string()),
        Some(_) => None,
    }
}

/// Ghost-text suffix for the first name strictly extending `buffer`.
///
/// `names` is expected sorted (the registry keeps it that way), making the
/// choice deterministic.
pub fn hint(buffer: &str, names: &[&str]) -> Option<String> {
    if buffer.is_empty() {
        return None;
    }

    names
        .iter()
        .find(|name| name.starts_with(buffer) && name.len() > buffer.len())
        .map(|name| name[buffer.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["echo", "help", "history"];

    #[test]
    fn test_single_candidate_completes() {
        assert_eq!(complete("ech", &["help", "echo"]), Some("echo".to_string()));
    }

    #[test]
    fn test_multiple_candidates_no_op() {
        // "help" and "history" both start with "he": buffer stays put.
        assert_eq!(complete("he", NAMES), None);
    }

    #[test]
    fn test_zero_candidates_no_op() {
        assert_eq!(complete("xyz", NAMES), None);
    }

    #[test]
    fn test_empty_buffer_no_op() {
        assert_eq!(complete("", NAMES), None);
    }

    #[test]
    fn test_exact_match_completes_to_itself() {
        assert_eq!(complete("echo", NAMES), Some("echo".to_string()));
    }

    #[test]
    fn test_no_trailing_space() {
        let completed = complete("hel", &["help"]).unwrap();
        assert_eq!(completed, "help");
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(complete("EC", NAMES), None);
    }

    #[test]
    fn test_hint_suffix() {
        assert_eq!(hint("ec", NAMES), Some("ho".to_string()));
        assert_eq!(hint("he", NAMES), Some("lp".to_string()));
    }

    #[test]
    fn test_hint_skips_exact_match() {
        // "echo" is already complete; nothing to extend.
        assert_eq!(hint("echo", &["echo"]), None);
    }

    #[test]
    fn test_hint_empty_buffer() {
        assert_eq!(hint("", NAMES), None);
    }
}
