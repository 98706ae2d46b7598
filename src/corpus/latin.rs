/*! Latin/English cross-linking.

Only part I has a Latin source. Its segments are identified with the same
scheme as the English ones, and their text is attached to the English record
carrying the same id.
!*/
use std::collections::{HashMap, HashSet};

use log::{info, warn};

use super::item::{EthicsItem, Source};
use crate::identify::identify;
use crate::segment::ParsedSegment;

/// Part covered by the Latin source.
pub const LATIN_PART: u32 = 1;

/// Latin text by canonical id, in document order.
#[derive(Debug, Default)]
pub struct LatinIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl LatinIndex {
    /// Index merged Latin segments. Segments outside part I are ignored.
    pub fn from_segments(segments: &[ParsedSegment]) -> Self {
        let mut index = Self::default();
        for segment in segments.iter().filter(|s| s.part() == LATIN_PART) {
            let id = identify(segment).id;
            let text = segment.text();
            match index.positions.get(&id) {
                Some(&position) => {
                    let entry = &mut index.entries[position].1;
                    entry.push_str(crate::segment::PARAGRAPH_SEPARATOR);
                    entry.push_str(&text);
                }
                None => {
                    index.positions.insert(id.clone(), index.entries.len());
                    index.entries.push((id, text));
                }
            }
        }
        index
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Outcome of [cross_link].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub linked: usize,
    /// Part I records left without Latin text.
    pub missing_latin: Vec<String>,
    /// Latin entries matching no English record.
    pub orphan_latin: Vec<String>,
}

/// Attach Latin text to the part I records, and list what could not be paired.
pub fn cross_link(items: &mut [EthicsItem], index: &LatinIndex, source: &Source) -> LinkReport {
    let mut report = LinkReport::default();
    let mut english_ids = HashSet::new();

    for item in items.iter_mut().filter(|i| i.part == LATIN_PART) {
        english_ids.insert(item.id.clone());
        match index.get(&item.id).filter(|text| !text.trim().is_empty()) {
            Some(text) => {
                item.text.original = text.to_string();
                if !item.meta.sources.contains(source) {
                    item.meta.sources.push(source.clone());
                }
                report.linked += 1;
            }
            None => {
                warn!("{}: no Latin text found", item.id);
                report.missing_latin.push(item.id.clone());
            }
        }
    }

    for id in index.ids().filter(|id| !english_ids.contains(*id)) {
        warn!("{}: Latin entry has no English counterpart", id);
        report.orphan_latin.push(id.to_string());
    }

    info!(
        "linked {} of {} Latin entries",
        report.linked,
        index.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::item::build_items;
    use crate::segment::Kind;

    fn segment(part: u32, kind: Kind, number: u32, text: &str) -> ParsedSegment {
        let mut s = ParsedSegment::numbered(part, kind, number);
        s.push_text(text);
        s
    }

    #[test]
    fn links_part_one_only() {
        let english = vec![
            segment(1, Kind::Definition, 1, "By that which is self-caused"),
            segment(1, Kind::Proposition, 1, "Substance is by nature prior"),
            segment(2, Kind::Definition, 1, "By body I mean"),
        ];
        let latin = vec![
            segment(1, Kind::Definition, 1, "Per causam sui intelligo"),
            segment(1, Kind::Axiom, 7, "Quicquid ut non existens"),
        ];
        let latin_source = Source::new("latin", None);
        let mut items = build_items(&english, &Source::new("english", None));
        let report = cross_link(&mut items, &LatinIndex::from_segments(&latin), &latin_source);

        assert_eq!(items[0].text.original, "Per causam sui intelligo");
        assert_eq!(items[0].meta.sources.len(), 2);
        assert_eq!(items[1].text.original, "");
        assert_eq!(items[2].text.original, "");
        assert_eq!(
            report,
            LinkReport {
                linked: 1,
                missing_latin: vec!["E1p1".to_string()],
                orphan_latin: vec!["E1Ax7".to_string()],
            }
        );
    }

    #[test]
    fn every_part_one_record_is_linked_or_reported() {
        let english: Vec<ParsedSegment> = (1..=8)
            .map(|n| segment(1, Kind::Proposition, n, "text"))
            .collect();
        let latin: Vec<ParsedSegment> = (1..=8)
            .filter(|n| n % 3 != 0)
            .map(|n| segment(1, Kind::Proposition, n, "textus"))
            .collect();
        let mut items = build_items(&english, &Source::new("english", None));
        let report = cross_link(
            &mut items,
            &LatinIndex::from_segments(&latin),
            &Source::new("latin", None),
        );
        for item in &items {
            assert!(!item.text.original.is_empty() || report.missing_latin.contains(&item.id));
        }
        assert_eq!(report.missing_latin, vec!["E1p3", "E1p6"]);
    }

    #[test]
    fn empty_latin_text_counts_as_missing() {
        let english = vec![segment(1, Kind::Definition, 2, "A thing is called finite")];
        let latin = vec![ParsedSegment::numbered(1, Kind::Definition, 2)];
        let mut items = build_items(&english, &Source::new("english", None));
        let report = cross_link(
            &mut items,
            &LatinIndex::from_segments(&latin),
            &Source::new("latin", None),
        );
        assert_eq!(report.missing_latin, vec!["E1D2"]);
    }
}
