/*! Segment classifier.

Single pass over the text blocks of a document. Every block either opens a new
segment, changes the classifier's context (part, section) or gets appended to the
segment currently open.

All the running state lives in a [Classifier] value, so independent documents
(or tests) never share counters.
!*/
use std::fmt;

use log::{debug, trace, warn};

use super::rules::{default_rules, Heading, Rule, SectionContext};
use super::{Kind, ParsedSegment};

/// Non-fatal oddities met while segmenting. They are logged and kept for the build report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentationWarning {
    /// Corollary or scholium heading before any proposition of its part.
    OrphanAttachment {
        part: u32,
        kind: Kind,
        block: String,
    },
    /// A heading rule applied but its numeral could not be read.
    UnresolvedNumeral {
        rule: &'static str,
        block: String,
        reason: String,
    },
}

impl fmt::Display for SegmentationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentationWarning::OrphanAttachment { part, kind, block } => write!(
                f,
                "part {}: {} with no preceding proposition: {:?}",
                part, kind, block
            ),
            SegmentationWarning::UnresolvedNumeral {
                rule,
                block,
                reason,
            } => write!(f, "{} heading with unresolved numeral ({}): {:?}", rule, reason, block),
        }
    }
}

/// Context carried from one block to the next.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct State {
    /// 0 until a part heading is met.
    part: u32,
    section: Option<SectionContext>,
    last_proposition: u32,
    corollaries: u32,
    scholia: u32,
}

impl State {
    fn enter_part(&mut self, part: u32) {
        *self = State {
            part,
            ..State::default()
        };
    }

    /// Counters only restart on a new proposition number, so a split
    /// heading repeating the current one keeps its attachments numbered.
    fn enter_proposition(&mut self, number: u32) {
        if number != self.last_proposition {
            self.last_proposition = number;
            self.corollaries = 0;
            self.scholia = 0;
        }
    }

    /// Sub-index of the next corollary or scholium.
    /// An explicit numeral wins, otherwise the running counter is bumped.
    fn next_attachment(&mut self, kind: Kind, numeral: Option<u32>) -> u32 {
        let counter = match kind {
            Kind::Corollary => &mut self.corollaries,
            _ => &mut self.scholia,
        };
        *counter = numeral.unwrap_or(*counter + 1);
        *counter
    }
}

/// Output of a classification pass: segments in document order, duplicates included.
#[derive(Debug, Default)]
pub struct Classification {
    pub segments: Vec<ParsedSegment>,
    pub warnings: Vec<SegmentationWarning>,
}

pub struct Classifier {
    rules: Vec<Box<dyn Rule + Sync>>,
    state: State,
    open: Option<ParsedSegment>,
    segments: Vec<ParsedSegment>,
    warnings: Vec<SegmentationWarning>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            state: State::default(),
            open: None,
            segments: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl Classifier {
    /// Classifier for documents without part headings (the Latin text of part I).
    pub fn with_part(part: u32) -> Self {
        let mut classifier = Self::default();
        classifier.state.enter_part(part);
        classifier
    }

    /// Classify one block.
    pub fn feed(&mut self, block: &str) {
        let text = block.trim();
        if text.is_empty() {
            return;
        }

        match self.match_heading(text) {
            Some(Heading::Part(part)) => {
                debug!("entering part {}", part);
                self.close();
                self.state.enter_part(part);
            }
            Some(Heading::Section(section)) => {
                trace!("section {:?}", section);
                self.close();
                self.state.section = section;
            }
            Some(Heading::Statement {
                kind,
                numeral,
                rest,
            }) => self.open_statement(text, kind, numeral, rest),
            Some(Heading::Continuation { kind, number, rest }) => {
                self.continue_section(kind, number, rest)
            }
            None => self.append(text),
        }
    }

    /// Close the last segment and hand everything over.
    pub fn finish(mut self) -> Classification {
        self.close();
        Classification {
            segments: self.segments,
            warnings: self.warnings,
        }
    }

    /// First applicable rule wins. A rule that applies with a bad numeral is
    /// reported and the block is treated as plain text.
    fn match_heading(&mut self, text: &str) -> Option<Heading> {
        let section = self.state.section;
        let mut unresolved = None;
        let heading = self.rules.iter().find_map(|rule| match rule.apply(text, section)? {
            Ok(heading) => Some(heading),
            Err(e) => {
                unresolved = Some(SegmentationWarning::UnresolvedNumeral {
                    rule: rule.name(),
                    block: text.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        });

        if heading.is_none() {
            if let Some(warning) = unresolved {
                self.warn(warning);
            }
        }
        heading
    }

    fn open_statement(&mut self, text: &str, kind: Kind, numeral: Option<u32>, rest: String) {
        if self.state.part == 0 {
            trace!("no part yet, skipping {:?}", text);
            return;
        }

        let segment = if kind.is_attached() {
            if self.state.last_proposition == 0 {
                self.warn(SegmentationWarning::OrphanAttachment {
                    part: self.state.part,
                    kind,
                    block: text.to_string(),
                });
                self.append(text);
                return;
            }
            let sub_index = self.state.next_attachment(kind, numeral);
            ParsedSegment::attached(self.state.part, kind, self.state.last_proposition, sub_index)
        } else {
            let Some(number) = numeral else {
                self.append(text);
                return;
            };
            match kind {
                Kind::Proposition => {
                    self.state.enter_proposition(number);
                    self.state.section = None;
                }
                Kind::Lemma => self.state.section = None,
                _ => self.state.section = SectionContext::from_kind(kind),
            }
            ParsedSegment::numbered(self.state.part, kind, number)
        };

        self.close();
        self.open_with(segment, rest);
    }

    /// Bare numeral in a section. Continues the open segment when it is the same statement.
    fn continue_section(&mut self, kind: Kind, number: u32, rest: String) {
        if self.state.part == 0 {
            return;
        }

        let key = (self.state.part, kind, number, None, None);
        if let Some(open) = self.open.as_mut() {
            if open.key() == key {
                open.push_text(rest);
                return;
            }
        }

        self.close();
        self.open_with(ParsedSegment::numbered(self.state.part, kind, number), rest);
    }

    fn open_with(&mut self, mut segment: ParsedSegment, first: String) {
        trace!("opening {:?}", segment.key());
        segment.push_text(first);
        self.open = Some(segment);
    }

    fn append(&mut self, text: &str) {
        match self.open.as_mut() {
            Some(open) => open.push_text(text),
            None => trace!("discarding {:?}", text),
        }
    }

    fn close(&mut self) {
        if let Some(segment) = self.open.take() {
            self.segments.push(segment);
        }
    }

    fn warn(&mut self, warning: SegmentationWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Run a fresh classifier over `blocks`.
///
/// `part` seeds the current part for documents that carry no part heading.
pub fn classify<I, S>(blocks: I, part: Option<u32>) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = match part {
        Some(part) => Classifier::with_part(part),
        None => Classifier::default(),
    };
    for block in blocks {
        classifier.feed(block.as_ref());
    }
    classifier.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(c: &Classification) -> Vec<(u32, Kind, u32, Option<u32>, Option<u32>)> {
        c.segments.iter().map(|s| s.key()).collect()
    }

    #[test]
    fn proposition_after_part() {
        let c = classify(
            ["PART I.", "PROP. I. Substance is by nature prior to its modifications."],
            None,
        );
        assert_eq!(keys(&c), vec![(1, Kind::Proposition, 1, None, None)]);
        assert_eq!(
            c.segments[0].text(),
            "Substance is by nature prior to its modifications."
        );
    }

    #[test]
    fn abbreviation_without_dot() {
        let c = classify(["PART I", "PROP I Substance is prior"], None);
        assert_eq!(keys(&c), vec![(1, Kind::Proposition, 1, None, None)]);
        assert_eq!(c.segments[0].text(), "Substance is prior");
    }

    #[test]
    fn nothing_before_part() {
        let c = classify(
            [
                "THE ETHICS",
                "DEFINITIONS.",
                "I. By that which is self-caused",
                "PROP. I. Substance is by nature prior",
            ],
            None,
        );
        assert!(c.segments.is_empty());
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn bare_numerals_in_sections() {
        let c = classify(
            [
                "PART I.",
                "CONCERNING GOD.",
                "DEFINITIONS.",
                "I. By that which is self-caused,",
                "II. A thing is called finite",
                "Explanation.—A body is called finite",
                "AXIOMS.",
                "I. Everything which exists,",
                "II. That which cannot be conceived",
            ],
            None,
        );
        assert_eq!(
            keys(&c),
            vec![
                (1, Kind::Definition, 1, None, None),
                (1, Kind::Definition, 2, None, None),
                (1, Kind::Axiom, 1, None, None),
                (1, Kind::Axiom, 2, None, None),
            ]
        );
        assert_eq!(
            c.segments[1].text_parts(),
            &[
                "A thing is called finite".to_string(),
                "Explanation.—A body is called finite".to_string()
            ]
        );
    }

    #[test]
    fn rewrapped_numeral_continues_segment() {
        let c = classify(
            [
                "PART I.",
                "DEFINITIONS.",
                "III. By substance I mean",
                "III. that which is in itself",
            ],
            None,
        );
        assert_eq!(c.segments.len(), 1);
        assert_eq!(c.segments[0].text_parts().len(), 2);
    }

    #[test]
    fn corollaries_and_scholia() {
        let c = classify(
            [
                "PART I.",
                "PROP. III. Things which have nothing in common",
                "Proof.—If they have nothing in common",
                "Corollary.—Hence it follows",
                "Corollary.—Again",
                "Note.—I will here briefly",
                "PROP. IV. Two or more distinct things",
                "Corollary II.—Hence",
                "Corollary.—Thirdly",
            ],
            None,
        );
        assert_eq!(
            keys(&c),
            vec![
                (1, Kind::Proposition, 3, None, None),
                (1, Kind::Corollary, 1, Some(3), Some(1)),
                (1, Kind::Corollary, 2, Some(3), Some(2)),
                (1, Kind::Scholium, 1, Some(3), Some(1)),
                (1, Kind::Proposition, 4, None, None),
                (1, Kind::Corollary, 2, Some(4), Some(2)),
                (1, Kind::Corollary, 3, Some(4), Some(3)),
            ]
        );
        assert_eq!(
            c.segments[0].text(),
            "Things which have nothing in common\n\nProof.—If they have nothing in common"
        );
    }

    #[test]
    fn repeated_proposition_heading_keeps_counters() {
        let c = classify(
            [
                "PART I",
                "PROP. III. Things which have nothing in common",
                "Corollary.—Hence it follows",
                "PROP. III. cannot be one the cause of the other.",
                "Corollary.—Again",
            ],
            None,
        );
        let merged = crate::segment::merge(c.segments);
        let keys: Vec<_> = merged.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                (1, Kind::Proposition, 3, None, None),
                (1, Kind::Corollary, 1, Some(3), Some(1)),
                (1, Kind::Corollary, 2, Some(3), Some(2)),
            ]
        );
        assert_eq!(merged[1].text(), "Hence it follows");
        assert_eq!(merged[2].text(), "Again");
    }

    #[test]
    fn orphan_corollary_is_reported() {
        let c = classify(
            [
                "PART II.",
                "DEFINITIONS.",
                "I. By body I mean",
                "Corollary.—Misplaced",
            ],
            None,
        );
        assert_eq!(keys(&c), vec![(2, Kind::Definition, 1, None, None)]);
        assert_eq!(c.segments[0].text_parts().len(), 2);
        assert_eq!(
            c.warnings,
            vec![SegmentationWarning::OrphanAttachment {
                part: 2,
                kind: Kind::Corollary,
                block: "Corollary.—Misplaced".to_string()
            }]
        );
    }

    #[test]
    fn part_change_resets_counters() {
        let c = classify(
            [
                "PART I.",
                "PROP. XXXVI. Nothing exists",
                "PART II.",
                "Corollary.—Hence",
                "PROP. I. Thought is an attribute",
                "Note.—This proposition",
            ],
            None,
        );
        assert_eq!(
            keys(&c),
            vec![
                (1, Kind::Proposition, 36, None, None),
                (2, Kind::Proposition, 1, None, None),
                (2, Kind::Scholium, 1, Some(1), Some(1)),
            ]
        );
        assert_eq!(c.warnings.len(), 1);
    }

    #[test]
    fn proposition_clears_section() {
        let c = classify(
            [
                "PART I.",
                "AXIOMS.",
                "I. Everything which exists",
                "PROP. I. Substance",
                "I. This is a list item in a proof",
            ],
            None,
        );
        assert_eq!(
            keys(&c),
            vec![
                (1, Kind::Axiom, 1, None, None),
                (1, Kind::Proposition, 1, None, None),
            ]
        );
        assert_eq!(c.segments[1].text_parts().len(), 2);
    }

    #[test]
    fn seeded_part_for_latin() {
        let c = classify(
            [
                "DEFINITIONES",
                "I. Per causam sui intelligo",
                "PROPOSITIO I",
                "Substantia prior est natura suis affectionibus.",
                "DEMONSTRATIO",
                "Patet ex definitione 3 et 5.",
                "COROLLARIUM",
                "Hinc sequitur",
                "SCHOLIUM",
                "Cum finitum esse",
            ],
            Some(1),
        );
        assert_eq!(
            keys(&c),
            vec![
                (1, Kind::Definition, 1, None, None),
                (1, Kind::Proposition, 1, None, None),
                (1, Kind::Corollary, 1, Some(1), Some(1)),
                (1, Kind::Scholium, 1, Some(1), Some(1)),
            ]
        );
        assert_eq!(c.segments[1].text_parts().len(), 3);
    }

    #[test]
    fn unresolved_numeral_falls_back() {
        let c = classify(["PART I.", "PROP. I. Substance", "PROPOSITION 0. Nothing"], None);
        assert_eq!(c.segments.len(), 1);
        assert_eq!(c.segments[0].text_parts().len(), 2);
        assert!(matches!(
            c.warnings.as_slice(),
            [SegmentationWarning::UnresolvedNumeral {
                rule: "proposition",
                ..
            }]
        ));
    }
}
