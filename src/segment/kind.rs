//! Statement kinds.
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of statement kinds found in the Ethics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Definition,
    Axiom,
    Postulate,
    Lemma,
    Proposition,
    Corollary,
    Scholium,
}

impl Kind {
    /// Corollaries and scholia hang off a proposition instead of being numbered on their own.
    pub fn is_attached(&self) -> bool {
        matches!(self, Kind::Corollary | Kind::Scholium)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Definition => "definition",
            Kind::Axiom => "axiom",
            Kind::Postulate => "postulate",
            Kind::Lemma => "lemma",
            Kind::Proposition => "proposition",
            Kind::Corollary => "corollary",
            Kind::Scholium => "scholium",
        }
    }

    /// Capitalized name used in labels and references.
    pub fn title(&self) -> &'static str {
        match self {
            Kind::Definition => "Definition",
            Kind::Axiom => "Axiom",
            Kind::Postulate => "Postulate",
            Kind::Lemma => "Lemma",
            Kind::Proposition => "Proposition",
            Kind::Corollary => "Corollary",
            Kind::Scholium => "Scholium",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
