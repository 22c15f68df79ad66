//! Reading the plain-text RFC index

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directory the RFC tool keeps its files in, under the home directory
pub const RFC_DIR_NAME: &str = ".rfc_dirs_nvim";

/// Index file name inside the RFC directory
pub const INDEX_FILE_NAME: &str = "rfc_list.txt";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to open index {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read index: {0}")]
    Read(#[from] io::Error),

    #[error("no home directory; pass --rfc-dir or --list")]
    NoHome,
}

/// Where candidate lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    Stdin,
    File(PathBuf),
}

impl IndexSource {
    /// `--list` wins; `-` means stdin. Otherwise `<rfc_dir>/rfc_list.txt`,
    /// with `rfc_dir` defaulting to `~/.rfc_dirs_nvim`.
    pub fn resolve(list: Option<&Path>, rfc_dir: Option<&Path>) -> Result<Self, IndexError> {
        if let Some(list) = list {
            if list == Path::new("-") {
                return Ok(IndexSource::Stdin);
            }
            return Ok(IndexSource::File(list.to_path_buf()));
        }

        let dir = match rfc_dir {
            Some(dir) => dir.to_path_buf(),
            None => home_dir().ok_or(IndexError::NoHome)?.join(RFC_DIR_NAME),
        };
        Ok(IndexSource::File(dir.join(INDEX_FILE_NAME)))
    }

    pub fn read(&self) -> Result<Vec<String>, IndexError> {
        match self {
            IndexSource::Stdin => read_lines(io::stdin().lock()),
            IndexSource::File(path) => {
                let file = File::open(path).map_err(|source| IndexError::Open {
                    path: path.clone(),
                    source,
                })?;
                read_lines(BufReader::new(file))
            }
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Non-empty lines, in file order
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>, IndexError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}
