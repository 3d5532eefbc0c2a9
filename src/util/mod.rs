// Utility Module
// Interactive input helpers for the command line front end

pub mod prompt;

pub use prompt::read_u32;
