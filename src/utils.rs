/*!
 * Utility functions for codeprompt
 */

use std::fs;
use std::io;

use walkdir::WalkDir;

use crate::config::Config;
use crate::rules::FilterRules;

/// Count the files a scan would include, for progress tracking.
///
/// Runs the same pruning and filter rules as the scanner but never opens a
/// file, so the count is cheap; an omitted `.env` file may still be counted.
pub fn count_files(config: &Config) -> io::Result<u64> {
    let rules = FilterRules::new(
        &config.exclude_patterns,
        &config.whitelist,
        &config.blacklist,
    );
    let root = fs::canonicalize(&config.scan_dir)?;

    let keep = rules.clone();
    let mut count = 0;
    for entry in WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| keep.keep_entry(entry))
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let abs_path = entry.path();
        if abs_path == config.output_file {
            continue;
        }
        let rel_path = abs_path.strip_prefix(&root).unwrap_or(abs_path);
        if rules.accept_file(
            &rel_path.to_string_lossy(),
            &abs_path.to_string_lossy(),
            &entry.file_name().to_string_lossy(),
        ) {
            count += 1;
        }
    }

    Ok(count)
}
