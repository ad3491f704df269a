//! Input helpers for the CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const MSG_NO_SUCH_FILE: &str = "No such file or directory, I'm afraid.";
pub const MSG_SCAN_ERROR: &str = "Error in scanning.";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line} of {}", .path.display())]
    Scan {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Fixed message shown to the user when failures are not fatal.
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::Open { .. } => MSG_NO_SUCH_FILE,
            InputError::Scan { .. } => MSG_SCAN_ERROR,
        }
    }
}

/// Open a file for line-by-line reading; `-` means stdin.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
