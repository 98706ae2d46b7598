//! Validation of an already written corpus.
use std::collections::BTreeMap;
use std::path::PathBuf;

use log::info;

use crate::corpus::Validator;
use crate::error::Error;
use crate::io::read_corpus;
use crate::pipelines::pipeline::Pipeline;
use crate::segment::Kind;

use super::count_kinds;

#[derive(Debug)]
pub struct CheckReport {
    pub records: usize,
    pub counts: BTreeMap<Kind, usize>,
    pub below_threshold: bool,
}

pub struct CorpusCheck {
    src: PathBuf,
    min_records: usize,
}

impl CorpusCheck {
    pub fn new(src: PathBuf, min_records: usize) -> Self {
        Self { src, min_records }
    }
}

impl Pipeline<CheckReport> for CorpusCheck {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Fails on unreadable files, unknown kinds and any broken corpus invariant.
    fn run(&self) -> Result<CheckReport, Error> {
        info!("checking {:?}", self.src);
        let items = read_corpus(&self.src)?;
        let report = Validator::new(self.min_records).validate(&items)?;
        Ok(CheckReport {
            records: report.records,
            counts: count_kinds(&items),
            below_threshold: report.below_threshold,
        })
    }
}
