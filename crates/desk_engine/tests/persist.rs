use std::fs;

use desk_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rewriting_a_document_replaces_it() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("exports"));

    let first = writer
        .write("market-snippet-2026-10-19.pdf", b"%PDF-first")
        .unwrap();
    assert_eq!(first.file_name().unwrap(), "market-snippet-2026-10-19.pdf");
    assert_eq!(fs::read(&first).unwrap(), b"%PDF-first");

    let second = writer
        .write("market-snippet-2026-10-19.pdf", b"%PDF-second")
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"%PDF-second");
}

#[test]
fn text_content_is_written_as_is() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let path = writer.write("theme.ron", "(theme: \"dark\")").unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "(theme: \"dark\")");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("doc.pdf", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.pdf").exists());
}
