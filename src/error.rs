use std::path::PathBuf;

use thiserror::Error;

/// An error from opening, loading, saving, or reading a config document.
///
/// A merely missing key is not an error; accessors report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The file or its parent directories could not be created, read, or
	/// written
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// The file exists but does not contain a JSON object
	#[error("config file {} is not a valid JSON object", path.display())]
	Parse {
		/// The file that failed to parse
		path: PathBuf,
		/// The underlying JSON error
		#[source]
		source: serde_json::Error,
	},

	/// A typed accessor was used on a value of an incompatible type
	#[error("key '{key}' holds a {found} value, expected {expected}")]
	TypeMismatch {
		/// The key that was accessed
		key: String,
		/// What the accessor expected to find
		expected: &'static str,
		/// The JSON type actually stored under the key
		found: &'static str,
	},

	/// A date value is stored as a string, but not in the `%Y-%m-%d` encoding
	#[error("key '{key}' holds '{value}', which is not a valid date")]
	InvalidDate {
		/// The key that was accessed
		key: String,
		/// The string that failed to decode
		value: String,
	},
}
