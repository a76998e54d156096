//! Where a command reads its manifest from

use crate::manifest::{Manifest, ManifestError, parse_manifest_file, parse_manifest_reader};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("No manifest given and stdin is a terminal (pass a path or pipe JSON in)")]
    NoInput,

    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),
}

/// A manifest file, or JSON piped on stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// `None` and `-` mean stdin, which must not be a terminal
    pub fn from_arg(path: Option<PathBuf>) -> Result<Self, InputError> {
        match path {
            Some(path) if path.as_os_str() != "-" => Ok(Self::Path(path)),
            _ if atty::is(atty::Stream::Stdin) => Err(InputError::NoInput),
            _ => Ok(Self::Stdin),
        }
    }

    pub fn read(&self) -> Result<Manifest, InputError> {
        let manifest = match self {
            Self::Path(path) => parse_manifest_file(path)?,
            Self::Stdin => parse_manifest_reader(io::stdin().lock())?,
        };
        Ok(manifest)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}
