//! Segment merging.
//!
//! The source markup sometimes splits one statement over several headings, which
//! leaves the classifier with several segments sharing the same identity.
//! [merge] folds them back together.
use std::collections::HashMap;

use log::debug;

use super::{ParsedSegment, SegmentKey};

/// Keep one segment per identity, in order of first appearance, each with the
/// text of all its occurrences.
pub fn merge(segments: Vec<ParsedSegment>) -> Vec<ParsedSegment> {
    let mut positions: HashMap<SegmentKey, usize> = HashMap::with_capacity(segments.len());
    let mut merged: Vec<ParsedSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        let key = segment.key();
        match positions.get(&key) {
            Some(&position) => {
                debug!("merging duplicate segment {:?}", key);
                merged[position].absorb(segment);
            }
            None => {
                positions.insert(key, merged.len());
                merged.push(segment);
            }
        }
    }

    merged
}
