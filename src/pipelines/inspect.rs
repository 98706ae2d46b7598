//! Segmentation of a single document, for inspecting the heading rules.
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Error;
use crate::extract::BlockSource;
use crate::identify::identify;
use crate::pipelines::build::segment_document;
use crate::pipelines::pipeline::Pipeline;
use crate::segment::{ParsedSegment, SegmentationWarning};

/// A merged segment along with its identity.
#[derive(Debug, Serialize)]
pub struct SegmentView {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub label: String,
    #[serde(flatten)]
    pub segment: ParsedSegment,
}

impl From<ParsedSegment> for SegmentView {
    fn from(segment: ParsedSegment) -> Self {
        let identity = identify(&segment);
        Self {
            id: identity.id,
            reference: identity.reference,
            label: identity.label,
            segment,
        }
    }
}

pub struct SegmentDump {
    src: PathBuf,
    part: Option<u32>,
}

impl SegmentDump {
    /// `part` seeds the part number, for documents that have no part heading.
    pub fn new(src: PathBuf, part: Option<u32>) -> Self {
        Self { src, part }
    }
}

impl Pipeline<(Vec<SegmentView>, Vec<SegmentationWarning>)> for SegmentDump {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<(Vec<SegmentView>, Vec<SegmentationWarning>), Error> {
        let source = BlockSource::from_path(&self.src)?;
        let (segments, warnings) = segment_document(&source, self.part);
        Ok((segments.into_iter().map(SegmentView::from).collect(), warnings))
    }
}
