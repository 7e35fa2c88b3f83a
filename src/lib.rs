//! # filename
//! POSIX filename manipulation with the semantics of the Erlang `filename` module,
//! and a small runner that renders syntax trees with an external code generator.
//!
//! # Filename functions
//! ```
//! use filename::{dirname, join, join2};
//!
//! assert_eq!(dirname("/usr/src/kalle.erl"), "/usr/src");
//! assert_eq!(join(["/usr", "local", "bin"]), "/usr/local/bin");
//! assert_eq!(join(["a", "///b/", "c/"]), "/b/c");
//! assert_eq!(join2("/usr", "bin"), "/usr/bin");
//! ```
//!
//! None of the functions access the file system, and all of them are total.
//!
//! # Rendering
//! See [`render`] and [`Config`].

mod core;
pub use crate::core::filename::{
    basename, basename_ext, dirname, extension, join, join2, pathtype, rootname, rootname_ext,
    split, PathType,
};
pub use crate::core::{render, Config, Render, Verbosity};
pub mod error;
mod fs;
pub use crate::fs::{CommandRenderer, Renderer};
