use std::path::PathBuf;

/// Config for rendering a syntax tree
///
/// Use this to configure rendering when calling it from the library
/// # Example
/// ```no_run
/// use filename::{Render, Config, Verbosity};
///
/// // Use the default config
/// let mut cfg = Config::default();
/// // Change verbosity to verbose
/// cfg.verbosity = Verbosity::Verbose;
/// Render::run(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// The renderer command (e.g. `node codegen.js`). The tree is appended as the last argument
    pub renderer_cmd: String,
    /// The file containing the serialized syntax tree
    pub input: PathBuf,
    /// The file to write the source to. `None` for stdout
    pub output: Option<PathBuf>,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Rendering with `escodegen` found on `PATH`
    /// - Reading the tree from `tree.json` in the current directory
    /// - Printing the source to stdout
    /// - Regular verbosity
    fn default() -> Self {
        Self {
            renderer_cmd: "escodegen".to_string(),
            input: PathBuf::from("tree.json"),
            output: None,
            verbosity: Verbosity::Normal,
        }
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}
