use serde_json::Value;

/// A JSON map of strings to values. With the `preserve_order` feature of
/// serde_json enabled, keys keep their insertion order.
pub type JsonObject = serde_json::Map<String, Value>;

/// Returns an empty json object
pub fn empty_object() -> JsonObject {
	JsonObject::new()
}

/// The name of a JSON value's type, for use in error messages
pub fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(..) => "boolean",
		Value::Number(..) => "number",
		Value::String(..) => "string",
		Value::Array(..) => "array",
		Value::Object(..) => "object",
	}
}
