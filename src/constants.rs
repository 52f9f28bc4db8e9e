/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of resistance levels the trainer exposes
pub const LEVEL_COUNT: usize = 6;

/// Prefix marking a template value the user has not edited yet
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Number of user-editable string fields in `Config`
pub const STRING_FIELD_COUNT: usize = 6;
