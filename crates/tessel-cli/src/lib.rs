//! Tessel CLI library.
//!
//! This crate provides the core functionality for the `tessel` binary:
//! argument definitions, recipe resolution, and the command implementations.

pub mod cli_args;
pub mod commands;
pub mod input;
