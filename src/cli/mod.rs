//! CLI module - Command-line interface for Barback
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;
pub mod render;

use clap::{Parser, Subcommand};

/// Barback - cocktail recipe lookup
/// Search TheCocktailDB by ingredient or drink name
#[derive(Parser)]
#[command(name = "barback")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keep results in memory only for this run
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search drinks by ingredient or name
    #[command(alias = "s")]
    Search {
        /// Ingredient or drink name
        #[arg(required = true)]
        query: Vec<String>,
        /// Only show non-alcoholic drinks
        #[arg(long, short = 'n')]
        non_alcoholic: bool,
    },

    /// Show the full recipe for a drink id
    #[command(alias = "i")]
    Show {
        /// Drink ID from a search result
        id: String,
    },

    /// Suggest a random drink
    #[command(alias = "r")]
    Random,

    /// Create default config file
    Init,
}

pub use commands::*;
