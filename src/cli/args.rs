use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Flags that take a string value
const VALUE_FLAGS: [&str; 3] = ["type", "message", "ticket"];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "git-cc",
    version,
    args_override_self = true,
    about = "Create a conventional commit tagged with the ticket of the current branch"
)]
pub struct Args {
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = "fix",
        allow_hyphen_values = true,
        help = "Commit type (see -list-types)"
    )]
    pub commit_type: String,

    #[arg(
        long,
        default_value = "",
        allow_hyphen_values = true,
        help = "Commit message (required)"
    )]
    pub message: String,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Name of ticket. (implies autoticket not set)"
    )]
    pub ticket: Option<String>,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Does this commit contain a breaking change? (false by default)"
    )]
    pub breaking: bool,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Gets ticket name from branch name using branch Node driver branch conventions"
    )]
    pub autoticket: bool,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Doesn't perform 'git commit', only prints out the command that would be executed."
    )]
    pub dryrun: bool,

    #[arg(
        long = "list-types",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Lists valid commit types and their meanings"
    )]
    pub list_types: bool,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Args::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite single-dash long flags (`-type feat`, `-dryrun=false`) into the
/// double-dash form clap expects
///
/// Any single-dash token longer than one letter is treated as a long flag,
/// so unknown flags reach clap under the name the user typed. One-letter
/// shorts (`-h`, `-V`) stay as they are. The first element is the program
/// name and is left alone. Values that follow a string flag are never
/// rewritten, nor is anything after `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;

    while let Some(arg) = args.next() {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        let (dashes, body) = if let Some(body) = text.strip_prefix("--") {
            ("--", body)
        } else if let Some(body) = text.strip_prefix('-') {
            ("-", body)
        } else {
            normalized.push(arg);
            continue;
        };

        let (name, inline_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };

        expecting_value = VALUE_FLAGS.contains(&name) && !inline_value;

        if dashes == "-" && body.chars().count() > 1 {
            normalized.push(OsString::from(format!("-{}", text)));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
