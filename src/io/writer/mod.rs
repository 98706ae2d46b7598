/*!
# Corpus writing

The corpus is a single pretty-printed JSON array. It is serialized in memory,
written to a temporary file next to the destination and then moved over it,
so a failed run never leaves a truncated corpus behind.
!*/
mod corpus;
mod writertrait;

pub use corpus::CorpusWriter;
pub use writertrait::WriterTrait;
