//! # Broccoli Test
//!
//! Testing utilities for Broccoli services: fixture file loading and a
//! canned AnnoRepo HTTP stub.
//!
//! ## Overview
//!
//! - **[`FixtureDir`]**: loads bundled test fixture files as UTF-8 text from
//!   an explicitly configured base directory
//! - **[`mock_anno_repo`]**: registers a stub rule on a running
//!   [`wiremock::MockServer`] answering every `/anno-repo` request with the
//!   canned about-document
//! - **[`to_url`]**: formats `http://localhost:{port}{path}` for requests
//!   against a locally running server
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use broccoli_test::prelude::*;
//! use wiremock::MockServer;
//!
//! #[tokio::test]
//! async fn test_against_stubbed_anno_repo() {
//!     let server = MockServer::start().await;
//!     mock_anno_repo(&server, &FixtureDir::default()).await.unwrap();
//!
//!     let url = to_url(server.address().port(), "/anno-repo/about");
//!     let response = reqwest::get(url).await.unwrap();
//!     assert_eq!(response.status(), 200);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fixtures;
pub mod mock;
pub mod prelude;

// Re-export commonly used types at crate root
pub use error::{FixtureError, FixtureResult};
pub use fixtures::FixtureDir;
pub use mock::{mock_anno_repo, to_url, ANNO_REPO_ABOUT_FIXTURE, ANNO_REPO_PATH_PATTERN};
