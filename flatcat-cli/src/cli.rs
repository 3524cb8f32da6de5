//! Command-line argument parsing and execution

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flatcat_core::resolve_patterns;
use log::info;

use crate::output::{output_paths, MarkerWriter};

/// Concatenate files into a single marker-delimited text stream
#[derive(Debug, Parser)]
#[command(name = "flatcat", version, about)]
pub struct Cli {
    /// Files, directories, or glob patterns to concatenate
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Process directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Use paths relative to the current directory in markers
    #[arg(long)]
    pub relative: bool,

    /// Prefix for start/end marker lines
    #[arg(long, value_name = "STRING", default_value = "<<<")]
    pub marker_prefix: String,

    /// Suffix for start/end marker lines
    #[arg(long, value_name = "STRING", default_value = ">>>")]
    pub marker_suffix: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the patterns and write the concatenated stream
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let files = resolve_patterns(&self.patterns, self.recursive)?;
        info!("resolved {} file(s)", files.len());

        let out_paths = output_paths(&files, self.relative);
        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                self.emit(&files, &out_paths, BufWriter::new(file))
            }
            None => self.emit(&files, &out_paths, io::stdout().lock()),
        }
    }

    fn emit<W: Write>(&self, files: &[PathBuf], out_paths: &[String], writer: W) -> Result<()> {
        let mut writer =
            MarkerWriter::new(writer, self.marker_prefix.as_str(), self.marker_suffix.as_str());
        writer.header()?;
        for (file, out_path) in files.iter().zip(out_paths) {
            writer.emit(file, out_path)?;
        }
        writer.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let level = if self.quiet {
            "off"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
}
