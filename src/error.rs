//! Error enum
use std::fmt;
use std::path::PathBuf;

use crate::corpus::validate::Violation;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// One or more raw documents are absent. Nothing has been parsed yet.
    MissingInput {
        missing: Vec<PathBuf>,
        remediation: String,
    },
    /// A raw document could not be read as markup.
    Parse {
        path: Option<PathBuf>,
        reason: String,
    },
    /// Global invariants broken by the assembled corpus.
    Validation(Vec<Violation>),
    Persist(tempfile::PersistError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::MissingInput {
                missing,
                remediation,
            } => {
                writeln!(f, "missing raw source file(s):")?;
                for path in missing {
                    writeln!(f, "  - {}", path.display())?;
                }
                write!(f, "fetch them with:\n{}", remediation)
            }
            Error::Parse { path, reason } => match path {
                Some(path) => write!(f, "could not parse {}: {}", path.display(), reason),
                None => write!(f, "could not parse document: {}", reason),
            },
            Error::Validation(violations) => {
                write!(f, "corpus validation failed ({} violation(s))", violations.len())?;
                for v in violations {
                    write!(f, "\n  - {}", v)?;
                }
                Ok(())
            }
            Error::Persist(e) => write!(f, "could not persist corpus file: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Error {
        Error::Persist(e)
    }
}
