//! Command-line argument definitions for the mindgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every operation is a subcommand; configuration file
//! selection and logging verbosity apply to all of them.

use clap::{Parser, Subcommand};

/// Command-line arguments for the mindgraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Operations on mind-map documents.
///
/// Inputs ending in `.md` or `.markdown` are read as markdown outlines, all
/// other inputs as JSON documents.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a document
    Check {
        #[arg(help = "Path to the input file")]
        input: String,
    },

    /// Convert a document to canonical JSON
    Convert {
        #[arg(help = "Path to the input file")]
        input: String,

        /// Path to the output JSON file; standard output if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a document as an indented tree
    Tree {
        #[arg(help = "Path to the input file")]
        input: String,
    },

    /// Write the JSON export, and the markdown source for markdown input, into a directory
    Export {
        #[arg(help = "Path to the input file")]
        input: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: String,
    },

    /// Rewrite a JSON document whenever a markdown file settles after edits
    Watch {
        #[arg(help = "Path to the markdown file")]
        input: String,

        /// Path to the output JSON file
        #[arg(short, long)]
        output: String,

        /// How often the input file is checked, in milliseconds
        #[arg(long, default_value_t = 200)]
        poll_ms: u64,
    },
}
