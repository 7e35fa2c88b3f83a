//! Wrapper to perform file system and process operations
//!

mod renderer;
pub use renderer::{CommandRenderer, Renderer};

use crate::error::PathError;
use error_stack::{IntoReport, Result, ResultExt};
use std::fs;
use std::path::Path;

/// Read the serialized syntax tree from the input file
pub fn read_tree<P>(path: &P) -> Result<String, PathError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::read_to_string(path)
        .into_report()
        .change_context_lazy(|| PathError::from(&path))
        .attach_printable_lazy(|| format!("could not read input file: `{}`", path.display()))
}

/// Write the rendered source to the output file, replacing it if it exists
pub fn write_output<P>(path: &P, contents: &str) -> Result<(), PathError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, contents)
        .into_report()
        .change_context_lazy(|| PathError::from(&path))
        .attach_printable_lazy(|| format!("could not write output file: `{}`", path.display()))
}
