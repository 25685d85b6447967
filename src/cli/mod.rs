pub mod list;
pub mod post;
pub mod remove;
pub mod rotate;
pub mod upload;
pub mod watch;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graceway")]
#[command(version)]
#[command(about = "Content tools for the ministry site", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "graceway.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a collection in its display order.
    List {
        collection: String,
    },
    /// Create a blog post, optionally attaching an image.
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        /// Inline HTML body; use --body-file for longer content.
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        body_file: Option<PathBuf>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a document. Refuses to run without --yes.
    Remove {
        collection: String,
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Make the lesson dated today the current one.
    RotateLesson,
    /// Upload a file and print its durable URL.
    Upload {
        file: PathBuf,
    },
    /// Follow a collection, printing each snapshot as it changes.
    Watch {
        collection: String,
    },
}
