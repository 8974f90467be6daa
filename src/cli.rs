//! Command-line layer: clap definitions and one handler per subcommand.

pub mod commands;
pub mod parser;
