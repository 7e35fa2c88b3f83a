//! Rendering syntax trees with an external program

use crate::error::RenderError;
use error_stack::{IntoReport, Report, Result};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::Command;
use which::which;

/// Turns a serialized syntax-tree document into source text
pub trait Renderer {
    fn render(&self, tree: &str) -> Result<String, RenderError>;
}

/// Representation of a resolved renderer command like `escodegen` or `node codegen.js`.
///
/// The serialized tree is passed as the last argument and the generated
/// source is read from stdout.
#[derive(Debug)]
pub struct CommandRenderer {
    /// The renderer executable
    exe: PathBuf,
    /// The arguments passed before the tree (for example, a script path)
    args: Vec<String>,
}

impl Display for CommandRenderer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.exe.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl CommandRenderer {
    /// Create a new renderer from the given command
    pub fn new(cmd: &str) -> Result<Self, RenderError> {
        // split the command into the executable and the arguments
        let mut args = cmd.split_whitespace();
        let exe = match args.next() {
            Some(exe) => exe,
            None => {
                return Err(Report::new(RenderError::Resolve)
                    .attach_printable("renderer command is empty"))
            }
        };
        let exe = resolve_executable(exe)?;
        let args = args.map(String::from).collect::<Vec<_>>();

        Ok(Self { exe, args })
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, tree: &str) -> Result<String, RenderError> {
        log::debug!("rendering with `{self}`");
        let result = Command::new(&self.exe)
            .args(&self.args)
            .arg(tree)
            .output()
            .into_report()
            .map_err(|e| {
                e.change_context(RenderError::Execute)
                    .attach_printable(format!("Failed to execute renderer `{self}`"))
            })?;
        if result.status.success() {
            let output = String::from_utf8_lossy(&result.stdout).to_string();
            log::debug!("renderer output `{output}`");
            Ok(output)
        } else {
            let exit_code = match result.status.code() {
                Some(code) => code.to_string(),
                None => "unknown".to_string(),
            };
            Err(
                Report::new(RenderError::Execute).attach_printable(format!(
                    "Renderer `{}` failed with exit code {}: {}",
                    self,
                    exit_code,
                    String::from_utf8_lossy(&result.stderr)
                )),
            )
        }
    }
}

fn resolve_executable(exe: &str) -> Result<PathBuf, RenderError> {
    // not canonicalized: multi-call binaries dispatch on the name they are run as
    which(exe).into_report().map_err(|e| {
        e.change_context(RenderError::Resolve)
            .attach_printable(format!("could not resolve renderer executable: {exe}"))
    })
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_empty_command() {
        assert!(CommandRenderer::new("").is_err());
        assert!(CommandRenderer::new("   ").is_err());
    }

    #[test]
    fn test_missing_executable() {
        assert!(CommandRenderer::new("surely-not-a-real-renderer-exe").is_err());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_render_passes_tree_as_last_arg() {
        let renderer = CommandRenderer::new("printf %s").unwrap();
        let output = renderer.render("{\"type\":\"Program\"}").unwrap();
        assert_eq!("{\"type\":\"Program\"}", output);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_render_failure() {
        let renderer = CommandRenderer::new("false").unwrap();
        assert!(renderer.render("{}").is_err());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_display() {
        let renderer = CommandRenderer::new("printf %s").unwrap();
        assert!(renderer.to_string().ends_with("printf %s"));
    }
}
