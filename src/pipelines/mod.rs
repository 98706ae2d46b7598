//! Pipelines.
//!
//! Every command of the binary is a pipeline implementing the light
//! [pipeline::Pipeline] trait:
//! - [build::CorpusBuild] turns the raw documents into the corpus file,
//! - [check::CorpusCheck] validates an existing corpus file,
//! - [inspect::SegmentDump] shows how a single document gets segmented.
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::corpus::EthicsItem;
use crate::segment::Kind;

pub mod build;
pub mod check;
pub mod inspect;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use build::{assemble, Assembly, BuildReport, BuildWarning, CorpusBuild};
pub use check::{CheckReport, CorpusCheck};
pub use inspect::{SegmentDump, SegmentView};
pub use pipeline::Pipeline;

/// Number of records per kind, in kind order.
pub fn count_kinds(items: &[EthicsItem]) -> BTreeMap<Kind, usize> {
    items.iter().counts_by(|item| item.kind).into_iter().collect()
}

/// One `kind: count` line per kind present, plus the total.
pub fn format_counts(counts: &BTreeMap<Kind, usize>) -> String {
    let total: usize = counts.values().sum();
    counts
        .iter()
        .map(|(kind, count)| format!("{:>12}: {}", kind, count))
        .chain(std::iter::once(format!("{:>12}: {}", "total", total)))
        .join("\n")
}
