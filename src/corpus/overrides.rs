/*! Hand-curated corrections.

Some statements are not segmented well enough by the generic rules. Their text
and label are kept in a small table that is applied after cross-linking.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::item::EthicsItem;
use crate::error::Error;

/// Replacement values for one record. Unset fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides(Vec<Override>);

impl Default for Overrides {
    /// The built-in table: the definition of *causa sui*.
    fn default() -> Self {
        Self(vec![Override {
            id: "E1D1".to_string(),
            label: Some("Definition 1 (Self-caused)".to_string()),
            original: Some(
                "Per causam sui intelligo id cujus essentia involvit existentiam sive id cujus natura non potest concipi nisi existens."
                    .to_string(),
            ),
            translation: Some(
                "By that which is self-caused, I mean that of which the essence involves existence, or that of which the nature is only conceivable as existent."
                    .to_string(),
            ),
        }])
    }
}

impl Overrides {
    pub fn new(entries: Vec<Override>) -> Self {
        Self(entries)
    }

    /// Load a table from a JSON array of overrides. It replaces the built-in one.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<Override> = serde_json::from_reader(reader)?;
        debug!("loaded {} overrides from {:?}", entries.len(), path);
        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[Override] {
        &self.0
    }

    /// Apply every override, returning the ids that matched no record.
    pub fn apply(&self, items: &mut [EthicsItem]) -> Vec<String> {
        let mut unmatched = Vec::new();
        for entry in &self.0 {
            let Some(item) = items.iter_mut().find(|item| item.id == entry.id) else {
                warn!("override {} matches no record", entry.id);
                unmatched.push(entry.id.clone());
                continue;
            };

            if let Some(label) = &entry.label {
                item.label = label.clone();
            }
            if let Some(original) = &entry.original {
                item.text.original = original.clone();
            }
            if let Some(translation) = &entry.translation {
                item.text.translation = translation.clone();
            }
            debug!("applied override to {}", entry.id);
        }
        unmatched
    }
}
