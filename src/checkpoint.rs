//! Checkpoint output.
//!
//! A checkpoint is the full live token sequence, each token written as a
//! 16-bit integer in host byte order with no header or delimiter. Every
//! checkpoint replaces the previous file contents.

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input filename to form the output filename.
pub const OUTPUT_SUFFIX: &str = ".rtok";

/// Receives snapshots of the live token sequence.
pub trait CheckpointSink {
    fn write(&mut self, tokens: &[Symbol]) -> Result<()>;
}

/// Keeps every snapshot in memory.
impl CheckpointSink for Vec<Vec<Symbol>> {
    fn write(&mut self, tokens: &[Symbol]) -> Result<()> {
        self.push(tokens.to_vec());
        Ok(())
    }
}

/// Writes checkpoints to a file, rewriting it each time.
#[derive(Debug, Clone)]
pub struct FileCheckpoint {
    path: PathBuf,
}

impl FileCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file for a given input: the input path with [`OUTPUT_SUFFIX`] appended.
    pub fn for_input(input: &Path) -> Self {
        let mut name = input.as_os_str().to_owned();
        name.push(OUTPUT_SUFFIX);
        Self::new(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_tokens(&self, tokens: &[Symbol]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for token in tokens {
            writer.write_all(&token.to_ne_bytes())?;
        }
        writer.flush()
    }
}

impl CheckpointSink for FileCheckpoint {
    fn write(&mut self, tokens: &[Symbol]) -> Result<()> {
        self.write_tokens(tokens)
            .map_err(|source| Error::OutputUnwritable {
                path: self.path.clone(),
                source,
            })
    }
}

/// Decodes a checkpoint file's contents back into tokens.
pub fn decode_tokens(bytes: &[u8]) -> Vec<Symbol> {
    bytes
        .chunks_exact(2)
        .map(|chunk| Symbol::from_ne_bytes([chunk[0], chunk[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bytepair-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_output_name() {
        let sink = FileCheckpoint::for_input(Path::new("data/enw3"));
        assert_eq!(sink.path(), Path::new("data/enw3.rtok"));
    }

    #[test]
    fn test_file_roundtrip_and_rewrite() {
        let path = scratch_path("rewrite.rtok");
        let mut sink = FileCheckpoint::new(&path);

        sink.write(&[1, 256, 65535]).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 6);
        assert_eq!(decode_tokens(&bytes), vec![1, 256, 65535]);

        // Second checkpoint replaces the first
        sink.write(&[257]).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes, 257u16.to_ne_bytes().to_vec());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_path() {
        let mut sink = FileCheckpoint::new(scratch_path("missing-dir").join("out.rtok"));
        assert!(matches!(
            sink.write(&[1, 2]),
            Err(Error::OutputUnwritable { .. })
        ));
    }

    #[test]
    fn test_memory_sink() {
        let mut sink: Vec<Vec<Symbol>> = Vec::new();
        sink.write(&[1, 2]).unwrap();
        sink.write(&[3]).unwrap();
        assert_eq!(sink, vec![vec![1, 2], vec![3]]);
    }
}
