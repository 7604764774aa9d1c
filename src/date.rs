use chrono::NaiveDate;

use crate::error::ConfigError;

/// The encoding used for date values in config files. The generic JSON
/// encoder has no date type, so dates are stored as strings in this fixed
/// day-precision format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Encodes a date into its config-file string representation
pub fn encode_date(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

/// Decodes a date from its config-file string representation. `key` names
/// the document entry the string came from and is only used in the error.
pub fn decode_date(key: &str, value: &str) -> Result<NaiveDate, ConfigError> {
	NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
		key: key.to_string(),
		value: value.to_string(),
	})
}
