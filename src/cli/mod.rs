//! CLI module: clap-based argument parsing and key-list handling.

mod clap_parser;

pub use clap_parser::{Cli, MatchArgs};
