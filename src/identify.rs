//! Canonical identifiers, references and labels.
//!
//! | kind | id | ref |
//! |---|---|---|
//! | definition | `E1D3` | `Part I, Definition 3` |
//! | axiom | `E1Ax3` | `Part I, Axiom 3` |
//! | postulate | `E2Post3` | `Part II, Postulate 3` |
//! | lemma | `E2L3` | `Part II, Lemma 3` |
//! | proposition | `E1p3` | `Part I, Proposition 3` |
//! | corollary | `E1p3c2` | `Part I, Proposition 3, Corollary 2` |
//! | scholium | `E1p3s1` | `Part I, Proposition 3, Scholium` |
use crate::roman::int_to_roman;
use crate::segment::{Kind, ParsedSegment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub reference: String,
    pub label: String,
}

/// Identity of a segment.
pub fn identify(segment: &ParsedSegment) -> Identity {
    identify_parts(
        segment.part(),
        segment.kind(),
        segment.number(),
        segment.of_proposition(),
        segment.sub_index(),
    )
}

/// Identity from raw coordinates.
///
/// For corollaries and scholia, `of_proposition` and `sub_index` are expected to be set;
/// `number` stands in for a missing `sub_index`.
pub fn identify_parts(
    part: u32,
    kind: Kind,
    number: u32,
    of_proposition: Option<u32>,
    sub_index: Option<u32>,
) -> Identity {
    let part_ref = format!("Part {}", int_to_roman(part));
    match kind {
        Kind::Corollary | Kind::Scholium => {
            let proposition = of_proposition.unwrap_or_default();
            let index = sub_index.unwrap_or(number);
            let (id, reference, label) = if kind == Kind::Corollary {
                (
                    format!("E{}p{}c{}", part, proposition, index),
                    format!(
                        "{}, Proposition {}, Corollary {}",
                        part_ref, proposition, index
                    ),
                    format!("Corollary {}", index),
                )
            } else {
                let label = match index {
                    1 => "Scholium".to_string(),
                    n => format!("Scholium {}", n),
                };
                (
                    format!("E{}p{}s{}", part, proposition, index),
                    format!("{}, Proposition {}, Scholium", part_ref, proposition),
                    label,
                )
            };
            Identity {
                id,
                reference,
                label,
            }
        }
        _ => {
            let code = match kind {
                Kind::Definition => "D",
                Kind::Axiom => "Ax",
                Kind::Postulate => "Post",
                Kind::Lemma => "L",
                _ => "p",
            };
            Identity {
                id: format!("E{}{}{}", part, code, number),
                reference: format!("{}, {} {}", part_ref, kind.title(), number),
                label: format!("{} {}", kind.title(), number),
            }
        }
    }
}
