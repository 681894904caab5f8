/*!
 * Directory traversal and file selection
 *
 * The scan is strictly single-threaded: one sequential pass over the tree
 * collecting [`FileRecord`]s in the order the OS reports entries. Traversal
 * order is NOT sorted; callers must not assume alphabetical output.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::{Config, EnvFileMode};
use crate::error;
use crate::error::Result;
use crate::language::{language_for, strip_comments};
use crate::report::FileReportInfo;
use crate::rules::FilterRules;
use crate::types::FileRecord;

/// Conventional name of environment-definition files
pub const ENV_FILE_NAME: &str = ".env";

/// Scan statistics, accumulated over one run
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    /// Number of files included in the output
    pub files_processed: usize,
    /// Number of files skipped due to per-file errors
    pub files_skipped: usize,
    /// Total number of lines across included files
    pub total_lines: usize,
    /// Total number of characters across included files
    pub total_chars: usize,
    /// Per-file details, keyed by relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Scanner for directory contents
pub struct Scanner {
    config: Config,
    rules: FilterRules,
    /// Progress bar, incremented once per processed file
    pub progress: ProgressBar,
    statistics: ScanStatistics,
}

impl Scanner {
    /// Create a new scanner; filter rules are derived from the configuration
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        let rules = FilterRules::new(
            &config.exclude_patterns,
            &config.whitelist,
            &config.blacklist,
        );
        Self {
            config,
            rules,
            progress,
            statistics: ScanStatistics::default(),
        }
    }

    /// The rule set this scanner filters with
    pub fn rules(&self) -> &FilterRules {
        &self.rules
    }

    /// Statistics gathered by the last call to [`Scanner::scan`]
    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    /// Walk the scan directory and collect records for every included file.
    ///
    /// Per-file errors (unreadable entries, non-UTF-8 content) are reported
    /// on stderr and skipped; only a missing scan root is fatal.
    pub fn scan(&mut self) -> Result<Vec<FileRecord>> {
        let root = fs::canonicalize(&self.config.scan_dir)?;
        let mut records = Vec::new();

        let rules = self.rules.clone();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| rules.keep_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Error reading entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let abs_path = entry.path();
            let rel_path = abs_path.strip_prefix(&root).unwrap_or(abs_path);
            let file_name = entry.file_name().to_string_lossy();

            // Never include the document being written
            if abs_path == self.config.output_file {
                continue;
            }

            if !self.rules.accept_file(
                &rel_path.to_string_lossy(),
                &abs_path.to_string_lossy(),
                &file_name,
            ) {
                continue;
            }

            match self.process_file(abs_path, rel_path, &file_name) {
                Ok(Some(record)) => {
                    self.progress.inc(1);
                    self.progress
                        .set_message(format!("Current file: {}", file_name));

                    let lines = record.content.lines().count();
                    let chars = record.content.chars().count();
                    self.statistics.files_processed += 1;
                    self.statistics.total_lines += lines;
                    self.statistics.total_chars += chars;
                    self.statistics.file_details.insert(
                        rel_path.to_string_lossy().to_string(),
                        FileReportInfo { lines, chars },
                    );

                    records.push(record);
                }
                Ok(None) => {} // omitted .env file
                Err(e) => {
                    eprintln!("Skipping {}: {}", abs_path.display(), e);
                    self.statistics.files_skipped += 1;
                }
            }
        }

        Ok(records)
    }

    /// Read and transform one accepted file.
    ///
    /// Env-file handling runs before comment stripping; returns `Ok(None)`
    /// when the env mode omits the file entirely.
    fn process_file(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        file_name: &str,
    ) -> Result<Option<FileRecord>> {
        let bytes = fs::read(abs_path)?;
        let mut content = String::from_utf8(bytes)
            .map_err(|_| error!(Decode, "{}", abs_path.display()))?;

        if file_name == ENV_FILE_NAME {
            match self.config.env_mode {
                EnvFileMode::Omit => return Ok(None),
                EnvFileMode::NamesOnly => content = env_names_only(&content),
                EnvFileMode::Full => {}
            }
        }

        let language = language_for(abs_path);
        if self.config.strip_comments {
            content = strip_comments(&content, language).into_owned();
        }

        Ok(Some(FileRecord {
            rel_path: rel_path.to_path_buf(),
            abs_path: abs_path.to_path_buf(),
            language,
            content,
        }))
    }
}

/// Reduce `KEY=VALUE` content to the keys only: one line per input line that
/// contains a `=`, keeping the text before the first `=`; other lines are
/// dropped.
pub fn env_names_only(content: &str) -> String {
    content
        .lines()
        .filter_map(|line| line.split_once('=').map(|(key, _)| key))
        .collect::<Vec<_>>()
        .join("\n")
}
