//! # Fleet Development Tools
//!
//! Command-line tools for development:
//! - Catalog loading and validation
//! - Shelling breakdown reports
//! - Parallel gear comparison for one slot

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod compare;
pub mod data_loader;
pub mod report;
pub mod validate;
