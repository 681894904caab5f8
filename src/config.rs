/*!
 * Configuration handling for codeprompt
 */

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::{bail, ensure, error};

/// Base name the output file falls back to
pub const DEFAULT_OUTPUT_NAME: &str = "code_prompt.md";

/// How environment-definition files (`.env`) are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFileMode {
    /// Skip `.env` files entirely (default)
    #[default]
    Omit,
    /// Keep only the variable names, dropping the values
    NamesOnly,
    /// Include full contents, values included
    Full,
}

/// Command-line arguments for codeprompt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codeprompt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a source tree into a Markdown document for LLM context",
    long_about = "Walks a directory tree, selects source files by whitelist/blacklist rules, \
                  optionally strips comments, and writes one timestamped Markdown document \
                  suitable for pasting into an LLM prompt."
)]
pub struct Args {
    /// Directory to scan for source files
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output Markdown file; a YYMMDD-HHMM timestamp is prepended to the
    /// file name, and a missing output directory is created
    #[clap(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Comma-separated glob patterns to exclude, matched against both the
    /// relative and the absolute file path
    #[clap(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Comma-separated glob patterns replacing the default whitelist
    #[clap(short, long, value_delimiter = ',')]
    pub whitelist: Vec<String>,

    /// Comma-separated exact file names replacing the default blacklist
    #[clap(short, long, value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Remove comments from the included code snippets
    #[clap(short = 'c', long)]
    pub strip_comments: bool,

    /// Include only the variable names (left of '=') from .env files
    #[clap(short = 'n', long, conflicts_with = "env_values")]
    pub env_names: bool,

    /// Include the entire contents of .env files, values included
    #[clap(short = 'v', long)]
    pub env_values: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to scan
    pub scan_dir: PathBuf,

    /// Output file path; holds the raw CLI value until
    /// [`Config::prepare_output`] rewrites it to the timestamped target
    pub output_file: PathBuf,

    /// Glob patterns that disqualify a file on match
    pub exclude_patterns: Vec<String>,

    /// Whitelist override (empty = use defaults)
    pub whitelist: Vec<String>,

    /// Blacklist override (empty = use defaults)
    pub blacklist: Vec<String>,

    /// Whether to strip comments from included files
    pub strip_comments: bool,

    /// Handling of `.env` files
    pub env_mode: EnvFileMode,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let env_mode = if args.env_names {
            EnvFileMode::NamesOnly
        } else if args.env_values {
            EnvFileMode::Full
        } else {
            EnvFileMode::Omit
        };

        Self {
            scan_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output),
            exclude_patterns: args.exclude,
            whitelist: args.whitelist,
            blacklist: args.blacklist,
            strip_comments: args.strip_comments,
            env_mode,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.scan_dir.exists() && self.scan_dir.is_dir(),
            InvalidDirectory,
            "{}",
            self.scan_dir.display()
        );
        Ok(())
    }

    /// Resolve the output path: create a missing output directory and rewrite
    /// `output_file` to the absolute timestamped target
    pub fn prepare_output(&mut self) -> Result<()> {
        self.prepare_output_at(Local::now())
    }

    /// Same as [`Config::prepare_output`] with an explicit clock value.
    ///
    /// A minute-granularity stamp collides when the tool runs twice within
    /// the same minute; on collision the stamp falls back to seconds
    /// precision, and if that path exists too the run fails rather than
    /// overwrite an earlier document.
    pub fn prepare_output_at(&mut self, now: DateTime<Local>) -> Result<()> {
        let dir = self
            .output_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = self
            .output_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_OUTPUT_NAME);

        // Base names without the code_prompt marker fall back to the default
        let name = if name.contains("code_prompt") {
            name.to_string()
        } else {
            DEFAULT_OUTPUT_NAME.to_string()
        };

        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| error!(OutputDirectory, "{}: {}", dir.display(), e))?;
        }

        let stamped = dir.join(format!("{}-{}", now.format("%y%m%d-%H%M"), name));
        let target = if stamped.exists() {
            let precise = dir.join(format!("{}-{}", now.format("%y%m%d-%H%M%S"), name));
            if precise.exists() {
                bail!(OutputFile, "refusing to overwrite {}", precise.display());
            }
            precise
        } else {
            stamped
        };

        self.output_file = if target.is_absolute() {
            target
        } else {
            env::current_dir()?.join(target)
        };

        Ok(())
    }
}
