use file_gzip::compressor::compress_file;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Read, Write};
use tempfile::{NamedTempFile, tempdir};

fn make_data(size: usize) -> Vec<u8> {
    // Patterned data for compressibility
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn test_size(data: &[u8]) {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(data).unwrap();
    let dir = tempdir().unwrap();
    let output = dir.path().join("data.gzip");

    compress_file(input.path(), &output).unwrap();

    let mut out_bytes = Vec::new();
    GzDecoder::new(File::open(&output).unwrap())
        .read_to_end(&mut out_bytes)
        .unwrap();
    assert_eq!(out_bytes.len(), data.len());
    assert!(out_bytes == data, "content mismatch for {} bytes", data.len());
}

#[test]
fn test_one_byte_under_copy_buffer() {
    test_size(&make_data(81_919));
}

#[test]
fn test_exact_copy_buffer() {
    test_size(&make_data(81_920));
}

#[test]
fn test_256kb_file() {
    test_size(&make_data(256 * 1024));
}

#[test]
fn test_1mb_file() {
    test_size(&make_data(1024 * 1024));
}

#[test]
fn test_4mb_file() {
    test_size(&make_data(4 * 1024 * 1024));
}
