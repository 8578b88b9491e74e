//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Encode, decode and render stored hand-drawn signatures
#[derive(Parser, Debug)]
#[command(name = "sigpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pad settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a legacy JSON signature into the compact form
    Encode {
        #[command(flatten)]
        io: Io,

        /// Pen width recorded in the header
        #[arg(long)]
        pen_width: Option<u32>,

        #[command(flatten)]
        surface: Surface,
    },

    /// Decode a compact or legacy signature into legacy JSON
    Decode {
        #[command(flatten)]
        io: Io,

        #[command(flatten)]
        surface: Surface,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Replay a signature into an SVG document
    Render {
        #[command(flatten)]
        io: Io,

        #[command(flatten)]
        surface: Surface,

        /// Surface height in pixels
        #[arg(long)]
        surface_height: Option<u32>,

        /// Stroke colour
        #[arg(long, default_value = "#145394")]
        color: String,
    },

    /// Describe a stored signature
    Inspect {
        #[command(flatten)]
        io: Io,

        #[command(flatten)]
        surface: Surface,
    },
}

#[derive(Args, Debug)]
pub struct Io {
    /// Input file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct Surface {
    /// Surface width in pixels
    #[arg(short = 'w', long)]
    pub surface_width: Option<u32>,
}
