/*! Corpus assembly.

Records are built from the English segments ([item]), receive their Latin text
([latin]), get the hand-curated corrections ([overrides]) and are checked as a
whole ([validate]) before being written.
!*/
pub mod item;
pub mod latin;
pub mod overrides;
pub mod validate;

pub use item::{build_items, EthicsItem, Source};
pub use latin::{cross_link, LatinIndex, LinkReport};
pub use overrides::{Override, Overrides};
pub use validate::{ValidationReport, Validator, Violation};
