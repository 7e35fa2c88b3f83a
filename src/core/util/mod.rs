mod status;
pub use status::*;
