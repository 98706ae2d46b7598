//! Corpus records.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::identify::identify;
use crate::segment::{Kind, ParsedSegment};

/// Language code of the original text.
pub const ORIGINAL_LANGUAGE: &str = "la";

/// Where a piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Source {
    pub fn new(name: &str, url: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            url: url.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemText {
    pub original_language: String,
    pub original: String,
    pub translation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub uses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub status: String,
}

impl Default for Proof {
    fn default() -> Self {
        Self {
            status: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub status: String,
    #[serde(default)]
    pub contributors: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// A statement of the Ethics, as consumed by the presentation layer.
///
/// `concepts`, `logic`, `dependencies` and `proof` are left empty by the
/// pipeline and filled in by hand afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicsItem {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub part: u32,
    pub kind: Kind,
    pub label: String,
    /// 1-based position inside the part.
    pub order: u32,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_proposition: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_index: Option<u32>,
    pub text: ItemText,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub logic: Vec<serde_json::Value>,
    #[serde(default)]
    pub dependencies: Dependencies,
    #[serde(default)]
    pub proof: Proof,
    pub meta: Meta,
}

impl EthicsItem {
    /// Skeleton record for an English segment. The Latin text is attached later.
    pub fn from_segment(segment: &ParsedSegment, order: u32, source: &Source) -> Self {
        let identity = identify(segment);
        Self {
            id: identity.id,
            reference: identity.reference,
            part: segment.part(),
            kind: segment.kind(),
            label: identity.label,
            order,
            number: segment.number(),
            of_proposition: segment.of_proposition(),
            sub_index: segment.sub_index(),
            text: ItemText {
                original_language: ORIGINAL_LANGUAGE.to_string(),
                original: String::new(),
                translation: segment.text(),
            },
            concepts: Vec::new(),
            logic: Vec::new(),
            dependencies: Dependencies::default(),
            proof: Proof::default(),
            meta: Meta {
                status: "draft".to_string(),
                contributors: Vec::new(),
                sources: vec![source.clone()],
            },
        }
    }
}

/// Build records from merged segments, numbering them per part in document order.
pub fn build_items(segments: &[ParsedSegment], source: &Source) -> Vec<EthicsItem> {
    let mut counters: HashMap<u32, u32> = HashMap::new();
    segments
        .iter()
        .map(|segment| {
            let order = counters.entry(segment.part()).or_insert(0);
            *order += 1;
            EthicsItem::from_segment(segment, *order, source)
        })
        .collect()
}
