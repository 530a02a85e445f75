/// Compose the commit header `<type>(<ticket>)[!]: <message>`
///
/// Inputs are expected to be validated by the caller.
pub fn build_commit_message(
    commit_type: &str,
    ticket_name: &str,
    commit_msg: &str,
    is_breaking: bool,
) -> String {
    let marker = if is_breaking { "!" } else { "" };
    format!("{}({}){}: {}", commit_type, ticket_name, marker, commit_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_breaking_message() {
        assert_eq!(
            build_commit_message("fix", "NODE-1", "handle empty input", false),
            "fix(NODE-1): handle empty input"
        );
    }

    #[test]
    fn test_breaking_message() {
        assert_eq!(
            build_commit_message("feat", "NODE-77", "drop v1 endpoints", true),
            "feat(NODE-77)!: drop v1 endpoints"
        );
    }

    #[test]
    fn test_message_text_is_kept_verbatim() {
        let msg = build_commit_message("docs", "NODE-3", "  spaced: \"quoted\"  ", false);
        assert_eq!(msg, "docs(NODE-3):   spaced: \"quoted\"  ");
    }
}
