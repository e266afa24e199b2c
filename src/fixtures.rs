//! Fixture file loading.
//!
//! This module resolves logical resource names against an explicitly
//! configured base directory and reads the named file as UTF-8 text.
//! The base directory is injected at construction instead of relying on an
//! ambient, process-wide search path.

use std::path::{Path, PathBuf};

use crate::error::{FixtureError, FixtureResult};

/// Default base directory, relative to the crate root.
const DEFAULT_BASE: &str = "resources";

/// Loader for bundled test fixture files.
///
/// Resolves classpath-style logical names (a leading `./` is accepted and
/// stripped) against a fixed base directory.
///
/// # Examples
///
/// ```
/// use broccoli_test::FixtureDir;
///
/// let fixtures = FixtureDir::default();
/// let body = fixtures.load("./arAboutResponse.json").unwrap();
/// assert!(body.contains("AnnoRepo"));
/// ```
#[derive(Debug, Clone)]
pub struct FixtureDir {
	base: PathBuf,
}

impl FixtureDir {
	/// Creates a loader rooted at the given base directory.
	///
	/// # Arguments
	///
	/// * `base` - Directory the logical names are resolved against
	pub fn new<P: AsRef<Path>>(base: P) -> Self {
		Self {
			base: base.as_ref().to_path_buf(),
		}
	}

	/// Returns the configured base directory.
	pub fn base(&self) -> &Path {
		&self.base
	}

	/// Resolves a logical resource name to a filesystem path.
	///
	/// A leading `./` in the name is stripped, so classpath-style names such
	/// as `./arAboutResponse.json` resolve inside the base directory.
	pub fn resolve(&self, name: &str) -> PathBuf {
		let relative = name.strip_prefix("./").unwrap_or(name);
		self.base.join(relative)
	}

	/// Checks whether a fixture file exists for the given logical name.
	pub fn contains(&self, name: &str) -> bool {
		self.resolve(name).is_file()
	}

	/// Loads a fixture file and decodes it as UTF-8.
	///
	/// The file handle is scoped to the read and released on all exit paths.
	/// Either the complete decoded content is returned or an error; a partial
	/// read is never observable.
	///
	/// # Arguments
	///
	/// * `name` - Logical resource name, resolved against the base directory
	///
	/// # Errors
	///
	/// Returns [`FixtureError::ResourceNotFound`] carrying the requested name
	/// when no file exists for it, and [`FixtureError::Io`] for any other
	/// read failure, including invalid UTF-8 content.
	pub fn load(&self, name: &str) -> FixtureResult<String> {
		let path = self.resolve(name);
		let bytes = match std::fs::read(&path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				return Err(FixtureError::ResourceNotFound(name.to_string()));
			}
			Err(e) => return Err(FixtureError::Io(e)),
		};

		String::from_utf8(bytes).map_err(|e| {
			FixtureError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
		})
	}
}

impl Default for FixtureDir {
	/// Points at the crate's own `resources/` directory.
	fn default() -> Self {
		Self::new(DEFAULT_BASE)
	}
}
