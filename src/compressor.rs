use anyhow::Context;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Seek, Write, copy};
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = ".gzip";

// 80 KiB
const COPY_BUFFER_SIZE: usize = 81_920;

/// `basename(input) + ".gzip"`. Inputs without a final component (`..`, `/`)
/// give just the suffix.
pub fn output_file_name(input: &Path) -> OsString {
    let mut name = input.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    name
}

/// Works out where the compressed file goes.
///
/// An explicit output that names an existing directory receives the derived
/// file name; any other explicit output is used verbatim. Without one, the
/// derived name is placed in `cwd`.
pub fn resolve_output_path(input: &Path, output: Option<&Path>, cwd: &Path) -> PathBuf {
    match output {
        Some(dir) if dir.is_dir() => dir.join(output_file_name(input)),
        Some(file) => file.to_path_buf(),
        None => cwd.join(output_file_name(input)),
    }
}

/// Streams `input_path` through a gzip encoder into `output_path`.
///
/// The output is created (or truncated) only after the input has been opened.
/// A failure part way through leaves whatever was written on disk.
pub fn compress_file(input_path: &Path, output_path: &Path) -> anyhow::Result<()> {
    let input_file = File::open(input_path)
        .with_context(|| format!("Failed to open input file {}", input_path.display()))?;
    // opening a directory succeeds on unix, so catch it before the output is truncated
    if input_file.metadata()?.is_dir() {
        anyhow::bail!("Failed to open input file {}: is a directory", input_path.display());
    }
    let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, input_file);

    let mut output_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output_path)
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;

    // encoder borrows the handle so the raw file outlives the gzip trailer
    let mut encoder = GzEncoder::new(&mut output_file, Compression::default());
    copy(&mut reader, &mut encoder).with_context(|| {
        format!(
            "Failed to compress {} into {}",
            input_path.display(),
            output_path.display()
        )
    })?;
    encoder.flush()?;
    encoder
        .finish()
        .with_context(|| format!("Failed to finish gzip stream {}", output_path.display()))?;

    output_file.flush()?;
    let written = output_file.stream_position()?;
    output_file.set_len(written)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_output_goes_to_cwd() {
        let out = resolve_output_path(Path::new("some/dir/input.txt"), None, Path::new("/work"));
        assert_eq!(out, PathBuf::from("/work/input.txt.gzip"));
    }

    #[test]
    fn existing_directory_gets_derived_name() {
        let dir = tempdir().unwrap();
        let out = resolve_output_path(
            Path::new("data/input.txt"),
            Some(dir.path()),
            Path::new("/work"),
        );
        assert_eq!(out, dir.path().join("input.txt.gzip"));
    }

    #[test]
    fn other_output_is_used_verbatim() {
        let out = resolve_output_path(
            Path::new("input.txt"),
            Some(Path::new("/no/such/parent/out.bin")),
            Path::new("/work"),
        );
        assert_eq!(out, PathBuf::from("/no/such/parent/out.bin"));
    }

    #[test]
    fn input_without_file_name() {
        assert_eq!(output_file_name(Path::new("..")), OsString::from(".gzip"));
        assert_eq!(output_file_name(Path::new("a/b.tar")), OsString::from("b.tar.gzip"));
    }
}
