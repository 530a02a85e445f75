use regex::Regex;

/// Pattern a ticket name must contain
pub const TICKET_PATTERN: &str = "NODE-[0-9]+";

/// Short form of [TICKET_PATTERN] used in error messages
pub const TICKET_PATTERN_HINT: &str = "NODE-xxxx";

/// Check a ticket name against [TICKET_PATTERN]
///
/// The match is unanchored: any name containing `NODE-<digits>` is accepted.
pub fn validate_ticket_name(ticket_name: &str) -> bool {
    Regex::new(TICKET_PATTERN).is_ok_and(|re| re.is_match(ticket_name))
}

/// Extract the candidate ticket from a branch name
///
/// Ticket branches follow the `NODE-xxx/description` convention, so the
/// candidate is everything before the first `/`. A branch without a slash
/// yields its whole (trimmed) name.
pub fn ticket_from_branch(branch_name: &str) -> String {
    branch_name
        .trim()
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
