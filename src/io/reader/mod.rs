/*! Corpus reading.
!*/
mod corpus;

pub use corpus::read_corpus;
