//! AnnoRepo stub registration.
//!
//! Registers a canned AnnoRepo response on a running [`wiremock::MockServer`]
//! so tests can exercise code that talks to an annotation repository without
//! a live instance.

use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::FixtureResult;
use crate::fixtures::FixtureDir;

/// Request path pattern served by the AnnoRepo stub.
///
/// Matches every request whose path starts with `/anno-repo`, any method.
pub const ANNO_REPO_PATH_PATTERN: &str = "/anno-repo.*";

/// Logical name of the fixture holding the canned about-document.
pub const ANNO_REPO_ABOUT_FIXTURE: &str = "./arAboutResponse.json";

/// Formats a loopback URL for a locally running server.
///
/// No validation of `port` or `path`; input is trusted to come from a
/// correctly configured local server.
///
/// # Examples
///
/// ```
/// use broccoli_test::to_url;
///
/// assert_eq!(to_url(8080, "/foo"), "http://localhost:8080/foo");
/// ```
pub fn to_url(port: u16, path: &str) -> String {
	format!("http://localhost:{port}{path}")
}

/// Registers the AnnoRepo stub on a running mock server.
///
/// Mounts exactly one rule: any request whose path starts with `/anno-repo`
/// is answered with status 200 and the JSON fixture
/// [`ANNO_REPO_ABOUT_FIXTURE`], served byte-for-byte as loaded. The fixture
/// is loaded before the rule is built, so a load failure registers nothing.
///
/// Calling this twice mounts two independent rules; which one answers an
/// overlapping request is the mock server's own matching policy.
///
/// # Errors
///
/// Propagates the [`FixtureDir::load`] error when the fixture is missing or
/// unreadable.
pub async fn mock_anno_repo(server: &MockServer, fixtures: &FixtureDir) -> FixtureResult<()> {
	let body = fixtures.load(ANNO_REPO_ABOUT_FIXTURE)?;

	// wiremock regex matching is unanchored; the anchor keeps the original
	// starts-with semantics of the pattern.
	Mock::given(path_regex(format!("^{ANNO_REPO_PATH_PATTERN}")))
		.respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
		.mount(server)
		.await;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_to_url() {
		assert_eq!(to_url(8080, "/foo"), "http://localhost:8080/foo");
	}

	#[rstest]
	fn test_to_url_empty_path() {
		assert_eq!(to_url(9200, ""), "http://localhost:9200");
	}

	#[rstest]
	fn test_path_pattern_literal() {
		assert_eq!(ANNO_REPO_PATH_PATTERN, "/anno-repo.*");
	}
}
