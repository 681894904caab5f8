/*!
 * Markdown writer implementation for codeprompt
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::error;
use crate::error::Result;
use crate::types::FileRecord;

/// Markdown writer for scanned file records
pub struct MarkdownWriter {
    config: Config,
}

impl MarkdownWriter {
    /// Create a new Markdown writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write all records, in the given order, to the configured output file.
    ///
    /// The output stream is opened once and held for the whole run.
    pub fn write(&self, records: &[FileRecord]) -> Result<()> {
        let file = File::create(&self.config.output_file)
            .map_err(|e| error!(OutputFile, "{}: {}", self.config.output_file.display(), e))?;
        let mut out = BufWriter::new(file);

        for record in records {
            self.write_section(&mut out, record)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Write one section: a level-2 heading with the relative path, then a
    /// fenced code block tagged with the inferred language
    fn write_section<W: Write>(&self, out: &mut W, record: &FileRecord) -> io::Result<()> {
        writeln!(out, "## {}\n", record.rel_path.display())?;
        writeln!(out, "```{}", record.language)?;
        writeln!(out, "{}", record.content)?;
        writeln!(out, "```\n")?;
        Ok(())
    }
}
