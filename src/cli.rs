//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use ethica::config::BuildConfig;
use ethica::segment::rules::PARTS;

#[derive(Debug, StructOpt)]
#[structopt(name = "ethica", about = "Spinoza's Ethics corpus builder.")]
/// Holds every command that is callable by the `ethica` command.
pub enum Ethica {
    #[structopt(about = "Build the corpus from the raw documents")]
    Build(Build),
    #[structopt(about = "Validate an existing corpus file")]
    Check(Check),
    #[structopt(about = "Print the segments found in a single document")]
    Segment(Segment),
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// ethica-build 0.1.0
/// Build the corpus from the raw documents
///
/// USAGE:
///     ethica build [OPTIONS]
///
/// OPTIONS:
///     -e, --english <english>            english translation (html) [default: raw/ethics_en.html]
///     -l, --latin <latin>                latin text of part I (html) [default: raw/ethics_la_part1.html]
///     -o, --dst <dst>                    corpus destination [default: data/ethics.json]
///         --overrides <overrides>        json override table replacing the built-in one
///         --min-records <min-records>    warn below this many records [default: 100]
/// ```
pub struct Build {
    #[structopt(
        parse(from_os_str),
        short = "e",
        long = "english",
        help = "english translation (html)",
        default_value = "raw/ethics_en.html"
    )]
    pub english: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "l",
        long = "latin",
        help = "latin text of part I (html)",
        default_value = "raw/ethics_la_part1.html"
    )]
    pub latin: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "dst",
        help = "corpus destination",
        default_value = "data/ethics.json"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "overrides",
        help = "json override table replacing the built-in one"
    )]
    pub overrides: Option<PathBuf>,
    #[structopt(
        long = "min-records",
        help = "warn below this many records",
        default_value = "100"
    )]
    pub min_records: usize,
}

impl From<Build> for BuildConfig {
    fn from(build: Build) -> Self {
        BuildConfig {
            english: build.english,
            latin: build.latin,
            dst: build.dst,
            overrides: build.overrides,
            min_records: build.min_records,
            ..BuildConfig::default()
        }
    }
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "corpus file to validate")]
    pub src: PathBuf,
    #[structopt(
        long = "min-records",
        help = "warn below this many records",
        default_value = "100"
    )]
    pub min_records: usize,
}

#[derive(Debug, StructOpt)]
/// Segment command and parameters.
pub struct Segment {
    #[structopt(parse(from_os_str), help = "html document to segment")]
    pub src: PathBuf,
    #[structopt(
        short = "p",
        long = "part",
        parse(try_from_str = parse_part),
        help = "part number (1 to 5) to assume for documents without part headings"
    )]
    pub part: Option<u32>,
}

fn parse_part(src: &str) -> Result<u32, String> {
    let part: u32 = src.parse().map_err(|e| format!("{}: {}", src, e))?;
    if PARTS.contains(&part) {
        Ok(part)
    } else {
        Err(format!("part {} is not in 1..=5", part))
    }
}
