use std::path::Path;

use crate::error::Error;

pub trait WriterTrait {
    type Item;

    fn new(dst: &Path) -> Self
    where
        Self: Sized;
    /// Write `vals`, replacing the previous content of the destination.
    /// Returns the hex SHA-256 digest of the written bytes.
    fn write(&mut self, vals: &[Self::Item]) -> Result<String, Error>;
}
