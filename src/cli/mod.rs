//! CLI Module
//!
//! Command-line interface for generating and inspecting layered mazes.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::grid::Axis;

/// Layermaze - layered maze generator
#[derive(Parser, Debug)]
#[command(name = "layermaze")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides applied on top of a loaded configuration
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of layers
    #[arg(long)]
    pub layers: Option<usize>,

    /// Number of independent path attempts
    #[arg(long)]
    pub paths: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the volume dump here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the layers after generating
    #[arg(long)]
    pub show: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new maze
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// Print every layer of a saved maze
    #[command(name = "show")]
    Show {
        /// Path to the maze dump
        path: PathBuf,

        /// Put layer grids next to each other
        #[arg(long)]
        side_by_side: bool,
    },

    /// Check for a straight corridor below a layer-0 source
    #[command(name = "reach")]
    Reach {
        /// Path to the maze dump
        path: PathBuf,

        /// Source column
        #[arg(long)]
        column: usize,

        /// Source row
        #[arg(long)]
        row: usize,
    },

    /// Collapse the maze onto a plane
    #[command(name = "collapse")]
    Collapse {
        /// Path to the maze dump
        path: PathBuf,

        /// Axis to collapse along (column, row, layer)
        #[arg(short, long, default_value = "layer")]
        axis: Axis,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every accessible point as JSON
    #[command(name = "points")]
    Points {
        /// Path to the maze dump
        path: PathBuf,
    },
}
