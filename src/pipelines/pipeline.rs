//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline, generic over what a run returns.
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
