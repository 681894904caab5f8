//! End-to-end tests driving the public library API the way the binary does:
//! count, scan, write, then inspect the generated Markdown document.

use std::fs;

use indicatif::ProgressBar;
use tempfile::tempdir;

use codeprompt::{count_files, Config, EnvFileMode, MarkdownWriter, Scanner};

fn base_config(scan_dir: &std::path::Path, output: &std::path::Path) -> Config {
    Config {
        scan_dir: scan_dir.to_path_buf(),
        output_file: output.to_path_buf(),
        exclude_patterns: vec![],
        whitelist: vec![],
        blacklist: vec![],
        strip_comments: false,
        env_mode: EnvFileMode::Omit,
    }
}

#[test]
fn generates_document_end_to_end() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    fs::write(project.path().join("main.py"), "# setup\nx = 1\n").unwrap();
    fs::write(project.path().join(".env"), "TOKEN=abc123\n").unwrap();
    fs::create_dir(project.path().join("node_modules")).unwrap();
    fs::write(
        project.path().join("node_modules").join("dep.js"),
        "module.exports = 1;\n",
    )
    .unwrap();

    let output = out_dir.path().join("250101-0101-code_prompt.md");
    let mut config = base_config(project.path(), &output);
    config.strip_comments = true;
    config.env_mode = EnvFileMode::NamesOnly;

    let mut scanner = Scanner::new(config.clone(), ProgressBar::hidden());
    let records = scanner.scan().unwrap();
    MarkdownWriter::new(config.clone()).write(&records).unwrap();

    let document = fs::read_to_string(&output).unwrap();

    assert!(document.contains("## main.py"));
    assert!(document.contains("```python"));
    assert!(document.contains("x = 1"));
    assert!(!document.contains("# setup"));

    assert!(document.contains("## .env"));
    assert!(document.contains("TOKEN"));
    assert!(!document.contains("abc123"));

    assert!(!document.contains("node_modules"));
    assert!(!document.contains("dep.js"));
}

#[test]
fn count_matches_scan() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    fs::write(project.path().join("a.py"), "pass\n").unwrap();
    fs::write(project.path().join("b.js"), "let b;\n").unwrap();
    fs::write(project.path().join("skip.txt"), "nope\n").unwrap();

    let output = out_dir.path().join("250101-0101-code_prompt.md");
    let config = base_config(project.path(), &output);

    let counted = count_files(&config).unwrap();

    let mut scanner = Scanner::new(config, ProgressBar::hidden());
    let records = scanner.scan().unwrap();

    assert_eq!(counted, records.len() as u64);
    assert_eq!(records.len(), 2);
}

#[test]
fn empty_directory_still_produces_output_file() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    let output = out_dir.path().join("250101-0101-code_prompt.md");
    let config = base_config(project.path(), &output);

    let mut scanner = Scanner::new(config.clone(), ProgressBar::hidden());
    let records = scanner.scan().unwrap();
    MarkdownWriter::new(config).write(&records).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}
