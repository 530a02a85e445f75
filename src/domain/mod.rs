//! Domain logic - pure rules for commit types, tickets and message layout

pub mod commit_type;
pub mod message;
pub mod ticket;

pub use commit_type::{commit_type_valid, CommitType};
pub use message::build_commit_message;
pub use ticket::{ticket_from_branch, validate_ticket_name};
