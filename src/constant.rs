/// Application name and metadata constants
pub const APP_NAME: &str = "etw-manifest-diff";

/// Marker searched for when shortening template ids for display
pub const ARGS_MARKER: &str = "Args";

/// Upper bound on how far display names are widened while disambiguating
pub const MAX_DISPLAY_NAME_WIDENING: usize = 100;

/// Indentation used for attributes and data lines in canonical text
pub const INDENT: &str = "    ";
