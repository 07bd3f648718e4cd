//! Core library for the dartesc source rewriter.
//!
//! dartesc walks a directory tree, finds string literals in Dart source files
//! and replaces every non-ASCII character inside them with a `\uXXXX` escape.
//! Raw literals and existing escape sequences are left alone, and each
//! modified file gets a one-time `.bak` backup.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the pure literal scanner and rewriter.
pub mod literal;

/// Module for splicing replacements into a buffer by byte range.
pub mod fix;

/// Module for decoding source files (UTF-8 with a UTF-16 fallback).
pub mod encoding;

/// Module processing one file: decode, transform, back up, write.
pub mod processor;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module containing utility functions.
pub mod utils;

/// Module for CLI output formatting with colored text and progress bars.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point logic shared by every binary.
pub mod entry_point;
