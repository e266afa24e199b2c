//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the broccoli-test crate.
//!
//! # Example
//!
//! ```ignore
//! use broccoli_test::prelude::*;
//!
//! let server = wiremock::MockServer::start().await;
//! mock_anno_repo(&server, &FixtureDir::default()).await?;
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Fixture loading
pub use crate::fixtures::FixtureDir;

// Stub registration
pub use crate::mock::{mock_anno_repo, to_url, ANNO_REPO_ABOUT_FIXTURE, ANNO_REPO_PATH_PATTERN};
