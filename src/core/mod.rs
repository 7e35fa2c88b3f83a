mod string;
pub use string::*;
mod util;
pub use util::*;
pub mod verbs;

pub mod filename;
mod execute;
pub use execute::*;
