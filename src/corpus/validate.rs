//! Corpus-wide checks run before anything is written.
use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{info, warn};

use super::item::EthicsItem;
use crate::error::Error;
use crate::identify::identify_parts;
use crate::segment::rules::PARTS;
use crate::segment::Kind;

/// Below this many records a full build is probably broken.
pub const DEFAULT_MIN_RECORDS: usize = 100;

/// A broken corpus invariant. Any of these fails the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateId(String),
    PartOutOfRange { id: String, part: u32 },
    /// The id does not follow the scheme of the record's kind.
    KindMismatch { id: String, kind: Kind, expected: String },
    /// `order` must strictly increase within a part, in file order.
    OrderNotIncreasing { id: String, order: u32, previous: u32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateId(id) => write!(f, "duplicate id {}", id),
            Violation::PartOutOfRange { id, part } => {
                write!(f, "{}: part {} is not in 1..=5", id, part)
            }
            Violation::KindMismatch { id, kind, expected } => {
                write!(f, "{}: a {} should be identified as {}", id, kind, expected)
            }
            Violation::OrderNotIncreasing {
                id,
                order,
                previous,
            } => write!(f, "{}: order {} does not follow {}", id, order, previous),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub records: usize,
    /// Set when the corpus is smaller than the sanity threshold.
    pub below_threshold: bool,
}

pub struct Validator {
    min_records: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            min_records: DEFAULT_MIN_RECORDS,
        }
    }
}

impl Validator {
    pub fn new(min_records: usize) -> Self {
        Self { min_records }
    }

    /// Check every record, collecting all violations rather than stopping at the first.
    pub fn validate(&self, items: &[EthicsItem]) -> Result<ValidationReport, Error> {
        let mut violations = Vec::new();
        let mut seen = HashSet::with_capacity(items.len());
        let mut last_order: HashMap<u32, u32> = HashMap::new();

        for item in items {
            if !seen.insert(item.id.as_str()) {
                violations.push(Violation::DuplicateId(item.id.clone()));
            }
            if !PARTS.contains(&item.part) {
                violations.push(Violation::PartOutOfRange {
                    id: item.id.clone(),
                    part: item.part,
                });
            }
            let expected = identify_parts(
                item.part,
                item.kind,
                item.number,
                item.of_proposition,
                item.sub_index,
            )
            .id;
            if expected != item.id {
                violations.push(Violation::KindMismatch {
                    id: item.id.clone(),
                    kind: item.kind,
                    expected,
                });
            }
            let previous = last_order.entry(item.part).or_insert(0);
            if item.order <= *previous {
                violations.push(Violation::OrderNotIncreasing {
                    id: item.id.clone(),
                    order: item.order,
                    previous: *previous,
                });
            }
            *previous = item.order;
        }

        if !violations.is_empty() {
            return Err(Error::Validation(violations));
        }

        let below_threshold = items.len() < self.min_records;
        if below_threshold {
            warn!(
                "corpus has only {} records (expected at least {})",
                items.len(),
                self.min_records
            );
        }
        info!("validated {} records", items.len());

        Ok(ValidationReport {
            records: items.len(),
            below_threshold,
        })
    }
}
