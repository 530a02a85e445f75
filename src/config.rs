use crate::cli::Args;
use crate::domain::CommitType;

/// Options for a single git-cc run, resolved once from the command line.
///
/// Flag interactions are settled here so the workflow never has to look at
/// raw flags: an explicit ticket always switches branch derivation off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOptions {
    /// Raw commit type as given; validated by the workflow
    pub commit_type: String,
    pub message: String,
    /// Explicit ticket, `None` when absent or empty
    pub ticket: Option<String>,
    pub breaking: bool,
    /// Derive the ticket from the current branch
    pub auto_ticket: bool,
    pub dry_run: bool,
    pub list_types: bool,
}

impl CommitOptions {
    /// Options with the command line defaults and the given message
    pub fn new(message: impl Into<String>) -> Self {
        CommitOptions {
            commit_type: CommitType::default().to_string(),
            message: message.into(),
            ticket: None,
            breaking: false,
            auto_ticket: true,
            dry_run: false,
            list_types: false,
        }
    }

    pub fn with_type(mut self, commit_type: impl Into<String>) -> Self {
        self.commit_type = commit_type.into();
        self
    }

    /// Set an explicit ticket; a non-empty ticket disables branch derivation
    pub fn with_ticket(mut self, ticket: impl Into<String>) -> Self {
        let ticket = ticket.into();
        if ticket.is_empty() {
            self.ticket = None;
        } else {
            self.ticket = Some(ticket);
            self.auto_ticket = false;
        }
        self
    }

    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Toggle branch derivation; ignored once an explicit ticket is set
    pub fn with_auto_ticket(mut self, auto_ticket: bool) -> Self {
        self.auto_ticket = auto_ticket && self.ticket.is_none();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_list_types(mut self, list_types: bool) -> Self {
        self.list_types = list_types;
        self
    }
}

impl From<&Args> for CommitOptions {
    fn from(args: &Args) -> Self {
        let mut options = CommitOptions::new(args.message.clone())
            .with_type(args.commit_type.clone())
            .with_breaking(args.breaking)
            .with_auto_ticket(args.autoticket)
            .with_dry_run(args.dryrun)
            .with_list_types(args.list_types);

        if let Some(ticket) = &args.ticket {
            options = options.with_ticket(ticket.clone());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve(args: &[&str]) -> CommitOptions {
        let mut full = vec!["git-cc"];
        full.extend_from_slice(args);
        let args = Args::try_parse_from(crate::cli::normalize_args(full)).unwrap();
        CommitOptions::from(&args)
    }

    #[test]
    fn test_defaults() {
        let options = resolve(&["-message", "x"]);
        assert_eq!(options, CommitOptions::new("x"));
        assert_eq!(options.commit_type, "fix");
        assert!(options.auto_ticket);
        assert_eq!(options.ticket, None);
    }

    #[test]
    fn test_explicit_ticket_disables_auto_ticket() {
        let options = resolve(&["-message", "x", "-ticket", "NODE-3"]);
        assert_eq!(options.ticket.as_deref(), Some("NODE-3"));
        assert!(!options.auto_ticket);
    }

    #[test]
    fn test_explicit_ticket_wins_over_autoticket_flag() {
        let options = resolve(&["-autoticket=true", "-ticket", "NODE-3", "-message", "x"]);
        assert!(!options.auto_ticket);

        let options = resolve(&["-ticket", "NODE-3", "-autoticket", "-message", "x"]);
        assert!(!options.auto_ticket);
    }

    #[test]
    fn test_empty_ticket_counts_as_absent() {
        let options = resolve(&["-message", "x", "-ticket", ""]);
        assert_eq!(options.ticket, None);
        assert!(options.auto_ticket);
    }

    #[test]
    fn test_autoticket_can_be_disabled() {
        let options = resolve(&["-message", "x", "-autoticket=false"]);
        assert!(!options.auto_ticket);
        assert_eq!(options.ticket, None);
    }

    #[test]
    fn test_switches_are_carried_over() {
        let options = resolve(&["-type", "perf", "-breaking", "-dryrun", "-list-types"]);
        assert_eq!(options.commit_type, "perf");
        assert!(options.breaking);
        assert!(options.dry_run);
        assert!(options.list_types);
    }
}
