//! Handlers for the CLI subcommands.

pub mod metadata_handlers;
