//! Parsed segment: a statement being accumulated by the classifier.
use serde::Serialize;

use super::Kind;

/// Identity of a segment: `(part, kind, number, of_proposition, sub_index)`.
pub type SegmentKey = (u32, Kind, u32, Option<u32>, Option<u32>);

/// Separator used when the raw text fragments of a segment are joined.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A statement of the corpus, with its text still split in raw fragments.
///
/// `of_proposition`/`sub_index` are only set on corollaries and scholia, and
/// for those `number` mirrors `sub_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSegment {
    part: u32,
    kind: Kind,
    number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    of_proposition: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_index: Option<u32>,
    text_parts: Vec<String>,
}

impl ParsedSegment {
    /// New definition, axiom, postulate, lemma or proposition.
    pub fn numbered(part: u32, kind: Kind, number: u32) -> Self {
        Self {
            part,
            kind,
            number,
            of_proposition: None,
            sub_index: None,
            text_parts: Vec::new(),
        }
    }

    /// New corollary or scholium of proposition `of_proposition`.
    pub fn attached(part: u32, kind: Kind, of_proposition: u32, sub_index: u32) -> Self {
        Self {
            part,
            kind,
            number: sub_index,
            of_proposition: Some(of_proposition),
            sub_index: Some(sub_index),
            text_parts: Vec::new(),
        }
    }

    pub fn key(&self) -> SegmentKey {
        (
            self.part,
            self.kind,
            self.number,
            self.of_proposition,
            self.sub_index,
        )
    }

    /// Append a raw fragment. Empty fragments are ignored.
    pub fn push_text<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.text_parts.push(text);
        }
    }

    /// Take over the fragments of another occurrence of the same segment.
    pub fn absorb(&mut self, other: ParsedSegment) {
        self.text_parts.extend(other.text_parts);
    }

    /// Joined text of the segment.
    pub fn text(&self) -> String {
        self.text_parts.join(PARAGRAPH_SEPARATOR)
    }

    pub fn part(&self) -> u32 {
        self.part
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn of_proposition(&self) -> Option<u32> {
        self.of_proposition
    }

    pub fn sub_index(&self) -> Option<u32> {
        self.sub_index
    }

    pub fn text_parts(&self) -> &[String] {
        &self.text_parts
    }
}
