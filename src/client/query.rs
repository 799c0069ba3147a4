//! Query-string model used by the dispatcher and the resource wrappers.
//!
//! Serialization rules: arrays become repeated keys, dates serialize to RFC 3339,
//! absent values are omitted entirely, and every other scalar stringifies with its
//! default conversion.

// crates.io
use time::format_description::well_known::Rfc3339;
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Ordered query parameters for one request.
#[derive(Clone, Debug, Default)]
pub struct Query(Vec<(String, QueryValue)>);
impl Query {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
		self.0.push((key.into(), value.into()));
	}

	/// Appends a parameter when the value is present; `None` is omitted entirely.
	pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<QueryValue>>) {
		if let Some(value) = value {
			self.insert(key, value);
		}
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.insert(key, value);

		self
	}

	/// Returns `true` when a parameter with `key` exists.
	pub fn contains(&self, key: &str) -> bool {
		self.0.iter().any(|(k, _)| k == key)
	}

	/// Returns `true` when no parameters are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Serializes every parameter onto a form-urlencoded target.
	pub(crate) fn encode<T: form_urlencoded::Target>(
		&self,
		serializer: &mut form_urlencoded::Serializer<T>,
	) {
		for (key, value) in &self.0 {
			value.encode(key, serializer);
		}
	}
}

/// One query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
	/// Boolean, serialized as `true`/`false`.
	Bool(bool),
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Floating point number.
	Float(f64),
	/// Plain string.
	String(String),
	/// Date value, serialized to RFC 3339.
	Date(OffsetDateTime),
	/// Array value, serialized as repeated keys.
	List(Vec<QueryValue>),
}
impl QueryValue {
	fn encode<T: form_urlencoded::Target>(
		&self,
		key: &str,
		serializer: &mut form_urlencoded::Serializer<T>,
	) {
		match self {
			Self::List(items) =>
				for item in items {
					item.encode(key, serializer);
				},
			scalar => {
				serializer.append_pair(key, &scalar.to_query_string());
			},
		}
	}

	fn to_query_string(&self) -> String {
		match self {
			Self::Bool(value) => value.to_string(),
			Self::Int(value) => value.to_string(),
			Self::UInt(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
			Self::String(value) => value.clone(),
			Self::Date(value) =>
				value.format(&Rfc3339).unwrap_or_else(|_| value.to_string()),
			Self::List(_) => String::new(),
		}
	}
}
impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}
impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}
impl From<bool> for QueryValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<i32> for QueryValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}
impl From<i64> for QueryValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
impl From<u32> for QueryValue {
	fn from(value: u32) -> Self {
		Self::UInt(value.into())
	}
}
impl From<u64> for QueryValue {
	fn from(value: u64) -> Self {
		Self::UInt(value)
	}
}
impl From<f64> for QueryValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
impl From<OffsetDateTime> for QueryValue {
	fn from(value: OffsetDateTime) -> Self {
		Self::Date(value)
	}
}
impl<V> From<Vec<V>> for QueryValue
where
	V: Into<QueryValue>,
{
	fn from(values: Vec<V>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

/// Client-level default for the API's `includeResources` query parameter.
#[derive(Clone, Debug)]
pub enum IncludeResources {
	/// Include all (or no) related resources.
	Flag(bool),
	/// Include the named related resources.
	Names(Vec<String>),
}
impl From<bool> for IncludeResources {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}
impl From<Vec<String>> for IncludeResources {
	fn from(values: Vec<String>) -> Self {
		Self::Names(values)
	}
}
impl From<IncludeResources> for QueryValue {
	fn from(value: IncludeResources) -> Self {
		match value {
			IncludeResources::Flag(flag) => Self::Bool(flag),
			IncludeResources::Names(names) =>
				Self::List(names.into_iter().map(Self::String).collect()),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn encode(query: &Query) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());

		query.encode(&mut serializer);

		serializer.finish()
	}

	#[test]
	fn arrays_become_repeated_keys() {
		let query = Query::new().with("ids", vec![1_i64, 2, 3]).with("limit", 10_u32);

		assert_eq!(encode(&query), "ids=1&ids=2&ids=3&limit=10");
	}

	#[test]
	fn dates_serialize_to_rfc3339() {
		let instant = OffsetDateTime::from_unix_timestamp(1_700_000_000)
			.expect("Timestamp fixture should be valid.");
		let query = Query::new().with("from", instant);

		assert_eq!(encode(&query), "from=2023-11-14T22%3A13%3A20Z");
	}

	#[test]
	fn absent_values_are_omitted() {
		let mut query = Query::new();

		query.insert_opt("city", None::<&str>);
		query.insert_opt("country", Some("NL"));

		assert_eq!(encode(&query), "country=NL");
		assert!(!query.contains("city"));
		assert!(query.contains("country"));
	}

	#[test]
	fn scalars_stringify_with_default_conversions() {
		let query = Query::new().with("flag", true).with("ratio", 0.5_f64).with("name", "a b");

		assert_eq!(encode(&query), "flag=true&ratio=0.5&name=a+b");
	}
}
