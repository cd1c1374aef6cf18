//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mediavault - validated product image storage with cascade deletion
#[derive(Parser, Debug)]
#[command(name = "mediavault")]
#[command(about = "Validated product image storage with cascade deletion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging, overriding RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a file and put it in the content store
    Store {
        /// File to store
        file: PathBuf,

        /// Declared filename (defaults to the file's name)
        #[arg(long)]
        filename: Option<String>,

        /// Declared MIME type (defaults to the one implied by the extension)
        #[arg(long)]
        mime_type: Option<String>,
    },

    /// Print the location of a stored artifact
    Resolve {
        /// Stored path returned by `store`
        path: String,
    },

    /// Delete a stored artifact
    Delete {
        /// Stored path returned by `store`
        path: String,
    },

    /// Store a file and record it against a product
    Upload {
        /// File to upload
        file: PathBuf,

        /// Product the image belongs to
        #[arg(long)]
        product_id: String,

        /// Seller uploading the image
        #[arg(long)]
        seller_id: String,

        /// Declared filename (defaults to the file's name)
        #[arg(long)]
        filename: Option<String>,

        /// Declared MIME type (defaults to the one implied by the extension)
        #[arg(long)]
        mime_type: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show a media record and where its artifact lives
    Show {
        /// Record id
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List media records of a product, a seller, or both
    List {
        /// Product to list
        #[arg(long, required_unless_present = "seller_id")]
        product_id: Option<String>,

        /// Seller to list
        #[arg(long)]
        seller_id: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Remove a media record and its artifact on behalf of its seller
    Remove {
        /// Record id
        id: String,

        /// Seller requesting the removal
        #[arg(long)]
        seller_id: String,
    },

    /// Handle product-deleted events read as JSON lines
    Consume {
        /// File of events, one JSON object per line (stdin if omitted)
        input: Option<PathBuf>,

        /// Topic the events were published on (defaults to the configured topic)
        #[arg(long)]
        topic: Option<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
