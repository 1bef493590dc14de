//! Configuration module for tally
//!
//! This module provides data file path resolution, including the
//! `TALLY_FILE` environment override and the working-directory default.

pub mod paths;

pub use paths::TallyPaths;
