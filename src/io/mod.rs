/*!
# IO utilities

Reading and writing of the assembled corpus file.
!*/
pub mod reader;
pub mod writer;

pub use reader::read_corpus;
pub use writer::{CorpusWriter, WriterTrait};
