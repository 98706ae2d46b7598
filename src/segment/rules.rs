/*! Heading rules.

Each rule recognizes one family of headings and turns it into a [Heading].
Rules are tried in order by the classifier and the first one that applies wins:

1. [PartRule]: `PART III`
1. [SectionRule]: a bare `DEFINITIONS` / `AXIOMATA` / `POSTULATES` / `PROPOSITIONS` line
1. [StatementRule]: a kind keyword followed by a numeral (`PROP. XIV.`, `Corollary II.`, `Note.`)
1. [NumeralRule]: a bare numeral (`III. ...`), only inside a definition/axiom/postulate section

English and Latin keywords are both recognized, and any numeral can be roman or arabic.
!*/
use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::Kind;
use crate::roman::{parse_numeral, RomanError};

/// Parts of the Ethics.
pub const PARTS: RangeInclusive<u32> = 1..=5;

const NUMERAL: &str = r"([IVXLCDM]+|\d+)";
/// Punctuation allowed between a heading and its text.
const SEPARATOR: &str = r"[\s.:,;—–\-]*";
/// Keyword-only headings (`Corollary.`, `Note.—`) need punctuation or end of line.
const TERMINATOR: &str = r"(?:\s*[.:—–\-][\s.:,;—–\-]*|$)";

fn numbered(keywords: &str, abbreviation: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)^(?:(?:{})\s+|{}(?:\.\s*|\s+)){}\b{}",
        keywords, abbreviation, NUMERAL, SEPARATOR
    ))
    .unwrap()
}

fn keyword_only(keywords: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)^(?:{})(?:\s+{}\b)?{}",
        keywords, NUMERAL, TERMINATOR
    ))
    .unwrap()
}

lazy_static! {
    static ref PART: Regex = Regex::new(&format!(r"(?i)^PART\s+{}\b", NUMERAL)).unwrap();
    static ref SECTION: Regex = Regex::new(
        r"(?i)^(DEFINITIONS?|DEFINITIONES|AXIOMS?|AXIOMATA|POSTULATES?|POSTULATA|PROPOSITIONS|PROPOSITIONES)[\s.:]*$"
    )
    .unwrap();
    static ref DEFINITION: Regex = numbered("DEFINITION|DEFINITIO", "DEF");
    static ref AXIOM: Regex = numbered("AXIOM|AXIOMA", "AX");
    static ref POSTULATE: Regex = numbered("POSTULATE|POSTULATUM", "POST");
    static ref PROPOSITION: Regex = numbered("PROPOSITION|PROPOSITIO", "PROP");
    static ref LEMMA: Regex = numbered("LEMMA", "LEM");
    static ref COROLLARY: Regex = keyword_only("COROLLARY|COROLLARIUM|COROLL");
    static ref SCHOLIUM: Regex = keyword_only("SCHOLIUM|SCHOL|NOTE");
    static ref BARE_NUMERAL: Regex =
        Regex::new(&format!(r"(?i)^{}\.(?:[\s—–\-]+|$)", NUMERAL)).unwrap();
}

/// Section a run of bare numerals belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContext {
    Definition,
    Axiom,
    Postulate,
}

impl SectionContext {
    pub fn kind(&self) -> Kind {
        match self {
            SectionContext::Definition => Kind::Definition,
            SectionContext::Axiom => Kind::Axiom,
            SectionContext::Postulate => Kind::Postulate,
        }
    }

    pub fn from_kind(kind: Kind) -> Option<Self> {
        match kind {
            Kind::Definition => Some(SectionContext::Definition),
            Kind::Axiom => Some(SectionContext::Axiom),
            Kind::Postulate => Some(SectionContext::Postulate),
            _ => None,
        }
    }
}

/// What a block turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// Start of a new part.
    Part(u32),
    /// Start of a section. `None` for sections that don't number their items
    /// with bare numerals (`PROPOSITIONS`).
    Section(Option<SectionContext>),
    /// Keyword heading. `numeral` is always set for numbered kinds, and optional for corollaries and scholia.
    Statement {
        kind: Kind,
        numeral: Option<u32>,
        rest: String,
    },
    /// Bare numeral inside a section.
    Continuation {
        kind: Kind,
        number: u32,
        rest: String,
    },
}

/// A heading rule.
///
/// Returns `None` when the rule does not apply, `Some(Err)` when it applies but
/// the numeral can't be resolved.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn apply(&self, text: &str, section: Option<SectionContext>)
        -> Option<Result<Heading, RomanError>>;
}

/// Text following the matched heading.
fn rest_of(text: &str, captures: &Captures) -> String {
    captures
        .get(0)
        .map(|m| text[m.end()..].trim().to_string())
        .unwrap_or_default()
}

fn numeral_of(captures: &Captures) -> Option<Result<u32, RomanError>> {
    captures.get(1).map(|m| parse_numeral(m.as_str()))
}

pub struct PartRule;

impl Rule for PartRule {
    fn name(&self) -> &'static str {
        "part"
    }

    /// Only parts I to V exist: other numerals are left to the following rules.
    fn apply(&self, text: &str, _: Option<SectionContext>) -> Option<Result<Heading, RomanError>> {
        let captures = PART.captures(text)?;
        match numeral_of(&captures)? {
            Ok(part) if PARTS.contains(&part) => Some(Ok(Heading::Part(part))),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

pub struct SectionRule;

impl Rule for SectionRule {
    fn name(&self) -> &'static str {
        "section"
    }

    fn apply(&self, text: &str, _: Option<SectionContext>) -> Option<Result<Heading, RomanError>> {
        let captures = SECTION.captures(text)?;
        let keyword = captures.get(1)?.as_str().to_uppercase();
        let context = if keyword.starts_with("DEFINITIO") {
            Some(SectionContext::Definition)
        } else if keyword.starts_with("AXIOM") {
            Some(SectionContext::Axiom)
        } else if keyword.starts_with("POSTULAT") {
            Some(SectionContext::Postulate)
        } else {
            None
        };
        Some(Ok(Heading::Section(context)))
    }
}

/// Keyword heading for a single kind.
pub struct StatementRule {
    kind: Kind,
    pattern: &'static Regex,
}

impl StatementRule {
    pub fn new(kind: Kind) -> Self {
        let pattern: &'static Regex = match kind {
            Kind::Definition => &*DEFINITION,
            Kind::Axiom => &*AXIOM,
            Kind::Postulate => &*POSTULATE,
            Kind::Lemma => &*LEMMA,
            Kind::Proposition => &*PROPOSITION,
            Kind::Corollary => &*COROLLARY,
            Kind::Scholium => &*SCHOLIUM,
        };
        Self { kind, pattern }
    }
}

impl Rule for StatementRule {
    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    fn apply(&self, text: &str, _: Option<SectionContext>) -> Option<Result<Heading, RomanError>> {
        let captures = self.pattern.captures(text)?;
        let numeral = match numeral_of(&captures) {
            Some(Ok(n)) => Some(n),
            Some(Err(e)) => return Some(Err(e)),
            None => None,
        };
        Some(Ok(Heading::Statement {
            kind: self.kind,
            numeral,
            rest: rest_of(text, &captures),
        }))
    }
}

pub struct NumeralRule;

impl Rule for NumeralRule {
    fn name(&self) -> &'static str {
        "numeral"
    }

    fn apply(
        &self,
        text: &str,
        section: Option<SectionContext>,
    ) -> Option<Result<Heading, RomanError>> {
        let section = section?;
        let captures = BARE_NUMERAL.captures(text)?;
        let number = match numeral_of(&captures)? {
            Ok(n) => n,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(Heading::Continuation {
            kind: section.kind(),
            number,
            rest: rest_of(text, &captures),
        }))
    }
}

/// Rules in priority order.
pub fn default_rules() -> Vec<Box<dyn Rule + Sync>> {
    vec![
        Box::new(PartRule),
        Box::new(SectionRule),
        Box::new(StatementRule::new(Kind::Definition)),
        Box::new(StatementRule::new(Kind::Axiom)),
        Box::new(StatementRule::new(Kind::Postulate)),
        Box::new(StatementRule::new(Kind::Proposition)),
        Box::new(StatementRule::new(Kind::Lemma)),
        Box::new(StatementRule::new(Kind::Corollary)),
        Box::new(StatementRule::new(Kind::Scholium)),
        Box::new(NumeralRule),
    ]
}
