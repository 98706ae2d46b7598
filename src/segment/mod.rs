/*! Segmentation of a block stream into corpus statements.

- [rules] recognizes headings,
- [classifier] runs the state machine that opens and fills [ParsedSegment]s,
- [merge] folds segments that the markup split in several places.
!*/
pub mod classifier;
mod kind;
pub mod merge;
pub mod rules;
#[allow(clippy::module_inception)]
mod segment;

pub use classifier::{classify, Classification, Classifier, SegmentationWarning};
pub use kind::Kind;
pub use merge::merge;
pub use segment::{ParsedSegment, SegmentKey, PARAGRAPH_SEPARATOR};
