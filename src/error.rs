//! Error types
//!
//! The filename functions never fail. These errors come from rendering
//! a syntax tree with an external program.

use std::error;
use std::fmt;
use std::path::Path;

/// Top level error
#[derive(Debug)]
pub struct ExecuteError;

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Rendering was unsuccessful! There might be error traces below."
        )
    }
}

impl error::Error for ExecuteError {}

/// Error from the external renderer
#[derive(Debug)]
pub enum RenderError {
    /// The renderer command cannot be resolved to an executable
    Resolve,
    /// The renderer ran but did not succeed
    Execute,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Resolve => write!(f, "Error resolving renderer executable"),
            RenderError::Execute => write!(f, "Error executing renderer"),
        }
    }
}

impl error::Error for RenderError {}

/// Error reading or writing a file
#[derive(Debug)]
pub struct PathError {
    /// The path that caused the error, as a string
    pub path: String,
}

impl<P> From<&P> for PathError
where
    P: AsRef<Path>,
{
    fn from(p: &P) -> Self {
        Self {
            path: p.as_ref().display().to_string(),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in path `{}`", self.path)
    }
}

impl error::Error for PathError {}
