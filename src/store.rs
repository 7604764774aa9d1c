use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::date::{decode_date, encode_date};
use crate::error::ConfigError;
use crate::json::{self, JsonObject};

/// The reserved key read by [`DocumentStore::redis_uri`]
pub const REDIS_URI_KEY: &str = "redisUri";

/// A JSON document paired with the file that backs it.
///
/// The document and the file are brought into sync at three points: when the
/// store is opened, on [`load`](Self::load), and on [`save`](Self::save).
/// In between, edits live only in memory. No file handle is held between
/// operations.
///
/// The store does no locking of its own. Each path must be owned by a single
/// store used from a single thread; callers that need multi-writer access
/// have to serialize it themselves.
#[derive(Debug)]
pub struct DocumentStore {
	path: PathBuf,
	document: JsonObject,
}

impl DocumentStore {
	/// Opens the document stored at `path`.
	///
	/// If the file does not exist yet, its parent directories are created and
	/// an empty object is written out. If it does exist, its contents are
	/// parsed into memory; a file that cannot be read fails with
	/// [`ConfigError::Io`] and one that holds invalid JSON fails with
	/// [`ConfigError::Parse`].
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
		let mut store = Self {
			path: path.into(),
			document: json::empty_object(),
		};
		if store.path.exists() {
			store.load()?;
		} else {
			create_leading_dirs(&store.path)?;
			store.save()?;
			tracing::debug!("Created empty config at {}", store.path.display());
		}
		Ok(store)
	}

	/// The file backing this store
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read-only view of the whole document
	pub fn document(&self) -> &JsonObject {
		&self.document
	}

	/// Replaces the whole in-memory document. Nothing reaches disk until
	/// [`save`](Self::save) is called.
	pub fn set_document(&mut self, document: JsonObject) {
		self.document = document;
	}

	/// Re-reads the backing file, replacing the in-memory document and
	/// discarding any unsaved edits. If reading or parsing fails, the
	/// previous in-memory document is left intact.
	pub fn load(&mut self) -> Result<(), ConfigError> {
		let contents = fs::read_to_string(&self.path)?;
		let document = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
			path: self.path.clone(),
			source,
		})?;
		self.document = document;
		tracing::debug!("Loaded config from {}", self.path.display());
		Ok(())
	}

	/// Writes the in-memory document to the backing file, replacing whatever
	/// was there. Output is pretty-printed, keys keep their insertion order,
	/// and null values are written out rather than dropped.
	///
	/// The write goes to a temporary sibling file which is then renamed over
	/// the target, so an interrupted save cannot leave a truncated file
	/// behind. The in-memory document is unaffected whether or not the save
	/// succeeds.
	pub fn save(&self) -> Result<(), ConfigError> {
		let contents =
			serde_json::to_string_pretty(&self.document).map_err(std::io::Error::from)?;
		let tmp = tmp_path(&self.path);
		fs::write(&tmp, contents)?;
		fs::rename(&tmp, &self.path)?;
		tracing::debug!("Saved config to {}", self.path.display());
		Ok(())
	}

	/// Looks up `key` and deserializes its value into `T`.
	///
	/// A missing key is `Ok(None)`, never an error. A value that is present
	/// but does not deserialize into `T` fails with
	/// [`ConfigError::TypeMismatch`]; note that an explicit JSON null only
	/// deserializes into types that accept it, such as `Option`.
	pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
		let Some(value) = self.document.get(key) else {
			return Ok(None);
		};
		let parsed = T::deserialize(value).map_err(|_| ConfigError::TypeMismatch {
			key: key.to_string(),
			expected: std::any::type_name::<T>(),
			found: json::type_name(value),
		})?;
		Ok(Some(parsed))
	}

	/// String accessor for `key`
	pub fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
		match self.document.get(key) {
			None => Ok(None),
			Some(Value::String(string)) => Ok(Some(string)),
			Some(other) => Err(type_mismatch(key, "string", other)),
		}
	}

	/// Boolean accessor for `key`
	pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
		match self.document.get(key) {
			None => Ok(None),
			Some(Value::Bool(value)) => Ok(Some(*value)),
			Some(other) => Err(type_mismatch(key, "boolean", other)),
		}
	}

	/// Integer accessor for `key`
	pub fn get_i64(&self, key: &str) -> Result<Option<i64>, ConfigError> {
		match self.document.get(key) {
			None => Ok(None),
			Some(Value::Number(number)) => number
				.as_i64()
				.map(Some)
				.ok_or_else(|| type_mismatch(key, "integer", &Value::Number(number.clone()))),
			Some(other) => Err(type_mismatch(key, "integer", other)),
		}
	}

	/// Date accessor for `key`. Dates are stored as `%Y-%m-%d` strings; a
	/// string that does not decode fails with [`ConfigError::InvalidDate`].
	pub fn get_date(&self, key: &str) -> Result<Option<NaiveDate>, ConfigError> {
		match self.document.get(key) {
			None => Ok(None),
			Some(Value::String(string)) => decode_date(key, string).map(Some),
			Some(other) => Err(type_mismatch(key, "date string", other)),
		}
	}

	/// The `redisUri` connection string, if one is configured
	pub fn redis_uri(&self) -> Result<Option<&str>, ConfigError> {
		self.get_str(REDIS_URI_KEY)
	}

	/// Sets `key` to `value` in the in-memory document
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.document.insert(key.into(), value.into());
	}

	/// Sets `key` to `date` in the fixed date encoding
	pub fn set_date(&mut self, key: impl Into<String>, date: NaiveDate) {
		self.document.insert(key.into(), Value::String(encode_date(date)));
	}

	/// Removes `key` from the in-memory document, returning its previous
	/// value if there was one
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.document.remove(key)
	}

	/// Whether the document has an entry for `key`, even a null one
	pub fn contains_key(&self, key: &str) -> bool {
		self.document.contains_key(key)
	}
}

fn type_mismatch(key: &str, expected: &'static str, found: &Value) -> ConfigError {
	ConfigError::TypeMismatch {
		key: key.to_string(),
		expected,
		found: json::type_name(found),
	}
}

/// Create all the directories leading up to a path
fn create_leading_dirs(path: &Path) -> std::io::Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}

	Ok(())
}

/// Sibling of `path` used for the write-then-rename in `save`
fn tmp_path(path: &Path) -> PathBuf {
	let mut name = path
		.file_name()
		.map(|name| name.to_os_string())
		.unwrap_or_default();
	name.push(".tmp");
	path.with_file_name(name)
}
