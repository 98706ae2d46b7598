//! # Ethica
//!
//! Builds a structured corpus of Spinoza's *Ethics* from the English
//! translation and the Latin text of part I.
//!
//! ## Getting started
//!
//! ```sh
//! ethica 0.1.0
//! Spinoza's Ethics corpus builder.
//!
//! USAGE:
//!     ethica <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build      Build the corpus from the raw documents
//!     check      Validate an existing corpus file
//!     help       Prints this message or the help of the given subcommand(s)
//!     segment    Print the segments found in a single document
//! ```
use std::process;

use structopt::StructOpt;

use ethica::config::BuildConfig;
use ethica::error::Error;
use ethica::pipelines::{format_counts, CorpusBuild, CorpusCheck, Pipeline, SegmentDump};

#[macro_use]
extern crate log;

mod cli;

fn run(opt: cli::Ethica) -> Result<(), Error> {
    match opt {
        cli::Ethica::Build(b) => {
            let config = BuildConfig::from(b);
            let report = CorpusBuild::new(config)?.run()?;
            for warning in &report.warnings {
                debug!("{}", warning);
            }
            println!("wrote {}", report.dst.display());
            println!("{}", format_counts(&report.counts));
            println!("{:>12}: {}", "sha256", report.digest);
            if !report.warnings.is_empty() {
                println!("{:>12}: {}", "warnings", report.warnings.len());
            }
        }

        cli::Ethica::Check(c) => {
            let report = CorpusCheck::new(c.src, c.min_records).run()?;
            println!("{}", format_counts(&report.counts));
            if report.below_threshold {
                println!("corpus has fewer than {} records", c.min_records);
            }
        }

        cli::Ethica::Segment(s) => {
            let (segments, warnings) = SegmentDump::new(s.src, s.part).run()?;
            for segment in &segments {
                println!("{}", serde_json::to_string(segment)?);
            }
            info!("{} segments, {} warnings", segments.len(), warnings.len());
        }
    };
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Ethica::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
