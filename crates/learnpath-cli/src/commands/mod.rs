//! CLI subcommand implementations.

pub mod catalog;
pub mod dashboard;
pub mod init;
pub mod recommend;
pub mod search;
pub mod validate;
