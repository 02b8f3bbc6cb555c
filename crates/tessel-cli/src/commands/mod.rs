//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod json_output;
pub mod recipe;
pub mod validate;

use std::process::ExitCode;

/// Exit code for recipe, flag and validation errors.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for generation and I/O errors.
pub const EXIT_FAILED: u8 = 2;

pub(crate) fn invalid() -> ExitCode {
    ExitCode::from(EXIT_INVALID)
}

pub(crate) fn failed() -> ExitCode {
    ExitCode::from(EXIT_FAILED)
}
