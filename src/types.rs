/*!
 * Core types for the codeprompt application
 */

use std::path::PathBuf;

/// A file that passed filtering, ready to be written as a Markdown section.
///
/// Records are ephemeral: created when a file is accepted, dropped once its
/// section has been written.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root, used as the section heading
    pub rel_path: PathBuf,
    /// Absolute path on disk
    pub abs_path: PathBuf,
    /// Fence language tag inferred from the extension
    pub language: &'static str,
    /// File content after env-file handling and comment stripping
    pub content: String,
}
