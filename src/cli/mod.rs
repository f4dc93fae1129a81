//! Command-line interface.

mod commands;

use clap::{Parser, Subcommand};

/// Fyyur - venue and artist booking
#[derive(Parser)]
#[command(name = "fyyur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "web")]
    Serve,

    /// Create a default config file and the database
    Init,

    /// List venues by location, search them, or show one venue
    #[command(alias = "v")]
    Venues {
        /// Venue ID to show in detail
        id: Option<i32>,
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,
    },

    /// List artists, search them, or show one artist
    #[command(alias = "a")]
    Artists {
        /// Artist ID to show in detail
        id: Option<i32>,
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,
    },

    /// List every show
    #[command(alias = "s")]
    Shows,
}

pub use commands::*;
