//! Common utilities for the stoffe page helpers.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - deduplicated, colored terminal output for recoverable problems
//! - **URL Resolution** - turning attribute values into the absolute form a browser exposes
//! - **Network** - probing whether a URL points at an image

pub mod net;
pub mod url;
pub mod warning;
