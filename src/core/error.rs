use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScanError {
    MissingDataDir(PathBuf),
    NoPuzzleFiles(PathBuf),
    EmptyTrain(String),
    PromptClosed,
    InvalidCount(usize),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDataDir(dir) => write!(f, "the directory '{}' was not found", dir.display()),
            Self::NoPuzzleFiles(dir) => write!(f, "no .json files found in '{}'", dir.display()),
            Self::EmptyTrain(file) => write!(f, "'{}' has no training examples", file),
            Self::PromptClosed => write!(f, "stdin closed before a file count was entered"),
            Self::InvalidCount(n) => write!(f, "file count must be at least 1 (got {})", n),
        }
    }
}

impl std::error::Error for ScanError {}

pub type Result<T> = std::result::Result<T, ScanError>;
