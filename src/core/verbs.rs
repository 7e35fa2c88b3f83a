//! Status verbs printed to the terminal

pub const USING: &str = "Using";
pub const READING: &str = "Reading";
pub const RENDERING: &str = "Rendering";
pub const WRITING: &str = "Writing";
pub const DONE: &str = "Done";
pub const FAILED: &str = "Failed";
