//! Standalone help script shipped with the crate.
//!
//! `assets/help.awk` prints the same listing as the `text` format using
//! nothing but awk, so a project can vendor it instead of depending on
//! mkhelp:
//!
//! ```makefile
//! help:
//! 	@awk -f help.awk $(MAKEFILE_LIST)
//! ```

/// Verbatim contents of `assets/help.awk`.
pub const BASE_SCRIPT: &str = include_str!("../assets/help.awk");

pub fn script() -> &'static str {
    BASE_SCRIPT
}
