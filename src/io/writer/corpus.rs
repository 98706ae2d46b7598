//! JSON corpus writer.
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use super::WriterTrait;
use crate::corpus::EthicsItem;
use crate::error::Error;

pub struct CorpusWriter {
    dst: PathBuf,
}

impl CorpusWriter {
    /// Serialized form of the corpus: pretty JSON followed by a newline.
    pub fn to_bytes(items: &[EthicsItem]) -> Result<Vec<u8>, Error> {
        let mut bytes = serde_json::to_vec_pretty(items)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Directory the temporary file is created in.
    fn parent_dir(&self) -> PathBuf {
        match self.dst.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl WriterTrait for CorpusWriter {
    type Item = EthicsItem;

    /// Nothing is created until [CorpusWriter::write] is called.
    fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    fn write(&mut self, items: &[EthicsItem]) -> Result<String, Error> {
        let bytes = Self::to_bytes(items)?;
        let digest = format!("{:x}", Sha256::digest(&bytes));

        let parent = self.parent_dir();
        if !parent.exists() {
            debug!("creating {:?}", parent);
            std::fs::create_dir_all(&parent)?;
        }

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.dst)?;

        info!(
            "wrote {} records ({} bytes) to {:?}",
            items.len(),
            bytes.len(),
            self.dst
        );
        Ok(digest)
    }
}
