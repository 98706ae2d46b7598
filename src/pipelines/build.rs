//! Corpus build pipeline.
//!
//! # Processing
//! 1. Both raw documents must exist, otherwise nothing is read.
//! 1. Each document goes through extraction, classification and merging. The
//!    Latin one starts in part I since it has no part heading.
//! 1. English segments become records, numbered per part.
//! 1. Part I records get their Latin text, then the override table is applied.
//! 1. The corpus is validated and, only then, written.
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::BuildConfig;
use crate::corpus::latin::LATIN_PART;
use crate::corpus::{build_items, cross_link, EthicsItem, LatinIndex, Overrides, Validator};
use crate::error::Error;
use crate::extract::BlockSource;
use crate::io::{CorpusWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::segment::{classify, merge, Kind, ParsedSegment, SegmentationWarning};

use super::count_kinds;

/// Which raw document something comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDocument {
    English,
    Latin,
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceDocument::English => write!(f, "english"),
            SourceDocument::Latin => write!(f, "latin"),
        }
    }
}

/// Non-fatal problems collected during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    Segmentation {
        document: SourceDocument,
        warning: SegmentationWarning,
    },
    /// Part I record left without Latin text.
    MissingLatin(String),
    /// Latin entry with no English record.
    OrphanLatin(String),
    UnmatchedOverride(String),
    SmallCorpus { records: usize, threshold: usize },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::Segmentation { document, warning } => {
                write!(f, "[{}] {}", document, warning)
            }
            BuildWarning::MissingLatin(id) => write!(f, "{}: no Latin text", id),
            BuildWarning::OrphanLatin(id) => write!(f, "{}: Latin entry without English record", id),
            BuildWarning::UnmatchedOverride(id) => write!(f, "{}: override matches no record", id),
            BuildWarning::SmallCorpus { records, threshold } => write!(
                f,
                "only {} records (sanity threshold is {})",
                records, threshold
            ),
        }
    }
}

/// Records assembled from both documents, not validated yet.
#[derive(Debug)]
pub struct Assembly {
    pub items: Vec<EthicsItem>,
    pub warnings: Vec<BuildWarning>,
}

#[derive(Debug)]
pub struct BuildReport {
    pub dst: PathBuf,
    /// Hex SHA-256 of the written corpus.
    pub digest: String,
    pub counts: BTreeMap<Kind, usize>,
    pub warnings: Vec<BuildWarning>,
}

/// Extract, classify and merge one document.
pub fn segment_document(
    source: &BlockSource,
    part: Option<u32>,
) -> (Vec<ParsedSegment>, Vec<SegmentationWarning>) {
    let classification = classify(source.blocks(), part);
    let raw = classification.segments.len();
    let segments = merge(classification.segments);
    debug!("{} segments, {} after merging", raw, segments.len());
    (segments, classification.warnings)
}

/// Assemble the corpus from parsed documents. No file is touched.
pub fn assemble(
    english: &BlockSource,
    latin: &BlockSource,
    overrides: &Overrides,
    config: &BuildConfig,
) -> Assembly {
    let mut warnings = Vec::new();

    let (english_segments, english_warnings) = segment_document(english, None);
    let (latin_segments, latin_warnings) = segment_document(latin, Some(LATIN_PART));
    for (document, found) in [
        (SourceDocument::English, english_warnings),
        (SourceDocument::Latin, latin_warnings),
    ] {
        warnings.extend(
            found
                .into_iter()
                .map(|warning| BuildWarning::Segmentation { document, warning }),
        );
    }
    info!(
        "{} english segments, {} latin segments",
        english_segments.len(),
        latin_segments.len()
    );

    let mut items = build_items(&english_segments, &config.english_source);

    let index = LatinIndex::from_segments(&latin_segments);
    let link = cross_link(&mut items, &index, &config.latin_source);
    let unmatched = overrides.apply(&mut items);

    // overrides may have filled in some of the missing Latin
    warnings.extend(
        link.missing_latin
            .into_iter()
            .filter(|id| {
                items
                    .iter()
                    .any(|item| &item.id == id && item.text.original.is_empty())
            })
            .map(BuildWarning::MissingLatin),
    );
    warnings.extend(link.orphan_latin.into_iter().map(BuildWarning::OrphanLatin));
    warnings.extend(unmatched.into_iter().map(BuildWarning::UnmatchedOverride));

    Assembly { items, warnings }
}

pub struct CorpusBuild {
    config: BuildConfig,
    overrides: Overrides,
}

impl CorpusBuild {
    /// Loads the override table given in `config`, if any.
    pub fn new(config: BuildConfig) -> Result<Self, Error> {
        let overrides = match &config.overrides {
            Some(path) => Overrides::from_path(path)?,
            None => Overrides::default(),
        };
        Ok(Self { config, overrides })
    }

    /// Fail early, before any parsing, if a raw document is absent.
    fn check_inputs(&self) -> Result<(), Error> {
        let missing: Vec<PathBuf> = [&self.config.english, &self.config.latin]
            .into_iter()
            .filter(|path| !path.is_file())
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingInput {
                missing,
                remediation: self.config.fetch_commands(),
            })
        }
    }
}

impl Pipeline<BuildReport> for CorpusBuild {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<BuildReport, Error> {
        self.check_inputs()?;

        info!("reading {:?}", self.config.english);
        let english = BlockSource::from_path(&self.config.english)?;
        info!("reading {:?}", self.config.latin);
        let latin = BlockSource::from_path(&self.config.latin)?;

        let Assembly {
            items,
            mut warnings,
        } = assemble(&english, &latin, &self.overrides, &self.config);

        let validation = Validator::new(self.config.min_records).validate(&items)?;
        if validation.below_threshold {
            warnings.push(BuildWarning::SmallCorpus {
                records: validation.records,
                threshold: self.config.min_records,
            });
        }

        let digest = CorpusWriter::new(&self.config.dst).write(&items)?;
        info!("corpus digest: {}", digest);
        if !warnings.is_empty() {
            warn!("build finished with {} warnings", warnings.len());
        }

        Ok(BuildReport {
            dst: self.config.dst.clone(),
            digest,
            counts: count_kinds(&items),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = r#"<html><body>
        <h1>ETHICS</h1>
        <h2>PART I.</h2>
        <h3>DEFINITIONS.</h3>
        <p>I. By that which is self—caused, I mean that of which the essence involves existence.</p>
        <p>II. A thing is called finite after its kind, when it can be limited by another thing.</p>
        <h3>PROPOSITIONS.</h3>
        <p>PROP. I. Substance is by nature prior to its modifications.</p>
        <p>Proof.—This is clear from Deff. iii. and v.</p>
        <h2>PART II.</h2>
        <p>PROP. I. Thought is an attribute of God.</p>
        <p>Note.—This proposition is also evident.</p>
    </body></html>"#;

    const LATIN: &str = r#"<html><body>
        <p>DEFINITIONES</p>
        <p>I. Per causam sui intelligo id cujus essentia involvit existentiam.</p>
        <p>PROPOSITIO I</p>
        <p>Substantia prior est natura suis affectionibus.</p>
        <p>PROPOSITIO II</p>
        <p>Duae substantiae diversa attributa habentes nihil inter se commune habent.</p>
    </body></html>"#;

    #[test]
    fn assemble_links_and_overrides() {
        let english = BlockSource::parse(ENGLISH).unwrap();
        let latin = BlockSource::parse(LATIN).unwrap();
        let assembly = assemble(
            &english,
            &latin,
            &Overrides::default(),
            &BuildConfig::default(),
        );

        let ids: Vec<&str> = assembly.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["E1D1", "E1D2", "E1p1", "E2p1", "E2p1s1"]);

        let p1 = &assembly.items[2];
        assert_eq!(p1.text.original, "Substantia prior est natura suis affectionibus.");
        assert_eq!(p1.meta.sources.len(), 2);

        let d1 = &assembly.items[0];
        assert_eq!(d1.label, "Definition 1 (Self-caused)");

        assert_eq!(
            assembly.warnings,
            vec![
                BuildWarning::MissingLatin("E1D2".to_string()),
                BuildWarning::OrphanLatin("E1p2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_inputs_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let english = dir.path().join("en.html");
        std::fs::write(&english, ENGLISH).unwrap();
        let config = BuildConfig {
            english,
            latin: dir.path().join("la.html"),
            dst: dir.path().join("out.json"),
            ..BuildConfig::default()
        };
        match CorpusBuild::new(config.clone()).unwrap().run() {
            Err(Error::MissingInput {
                missing,
                remediation,
            }) => {
                assert_eq!(missing, vec![config.latin.clone()]);
                assert!(remediation.contains("curl"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(!config.dst.exists());
    }
}
