// crates/cli/src/input.rs
use invalid_ids_shared_kernel::{InvalidIdsError, Result};
use log::debug;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the range text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from the CLI arguments; inline text wins over a path.
    pub fn from_args(ranges: Option<String>, path: Option<PathBuf>) -> Self {
        match (ranges, path) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) if path != Path::new("-") => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Load the whole input as text.
    ///
    /// # Errors
    /// Returns an error if the file or stdin cannot be read as UTF-8.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Self::Inline(text) => text.clone(),
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|source| InvalidIdsError::InputRead {
                    path: path.clone(),
                    source,
                })?
            }
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut buf)
                    .map_err(|source| InvalidIdsError::InputRead {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                buf
            }
        };
        debug!("read {} byte(s) from {self}", text.len());
        Ok(text)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => f.write_str("inline ranges"),
            Self::File(path) => write!(f, "'{}'", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}
