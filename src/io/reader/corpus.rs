//! Reader for an already written corpus file.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::corpus::EthicsItem;
use crate::error::Error;

/// Load a corpus file. Unknown kinds or malformed records are reported as [Error::Serde].
pub fn read_corpus(path: &Path) -> Result<Vec<EthicsItem>, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
