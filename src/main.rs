/*!
 * Command-line interface for codeprompt
 */

use std::io;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use codeprompt::config::{Args, Config};
use codeprompt::error::Result;
use codeprompt::report::{ReportFormat, Reporter, ScanReport};
use codeprompt::scanner::Scanner;
use codeprompt::utils::count_files;
use codeprompt::writer::MarkdownWriter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "codeprompt", &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let mut config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Resolve the timestamped output path, creating the output directory
    config.prepare_output()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_message(format!("Scanning directory: {}", config.scan_dir.display()));

    // Count files for progress tracking
    match count_files(&config) {
        Ok(count) => progress.set_length(count),
        Err(e) => eprintln!("Warning: Failed to count files: {}", e),
    }

    // Create scanner and writer
    let mut scanner = Scanner::new(config.clone(), progress.clone());
    let writer = MarkdownWriter::new(config.clone());

    // Time both the scan and the write
    let start_time = Instant::now();

    // Scan directory
    let records = scanner.scan()?;

    // Write Markdown output
    writer.write(&records)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare and print the scan report
    let stats = scanner.statistics();
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        files_processed: stats.files_processed,
        files_skipped: stats.files_skipped,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details.clone(),
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    println!("Markdown prompt created: {}", config.output_file.display());

    Ok(())
}
