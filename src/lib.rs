/*!
 * CodePrompt - Concatenate a source tree into Markdown for LLM context
 *
 * Walks a directory tree, selects source files by whitelist/blacklist rules,
 * optionally strips comments, and writes one timestamped Markdown document
 * with a fenced code block per file.
 */

pub mod config;
pub mod error;
pub mod language;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, EnvFileMode};
pub use error::{CodePromptError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use rules::FilterRules;
pub use scanner::{ScanStatistics, Scanner};
pub use types::FileRecord;
pub use utils::count_files;
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
