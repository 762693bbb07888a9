//! Request types for Rekognize API calls.
//!
//! This module provides [`HttpMethod`], the [`Params`] builder, and
//! [`sanitize_params`], which converts caller parameters into the wire
//! representation used by the dispatcher.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::clients::errors::TwitterError;

/// HTTP methods supported by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieval; parameters are sent as the query string.
    Get,
    /// Mutation; parameters are sent as a JSON (or multipart) body.
    Post,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = TwitterError;

    /// Parses a method name case-insensitively.
    ///
    /// ```rust
    /// use rekognize::HttpMethod;
    ///
    /// assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
    /// assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    /// assert!("delete".parse::<HttpMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(TwitterError::UnsupportedMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// A readable binary stream to upload, such as an image for media endpoints.
pub struct Upload {
    reader: Box<dyn Read + Send>,
    file_name: Option<String>,
}

impl Upload {
    /// Wraps a reader.
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            file_name: None,
        }
    }

    /// Sets the file name reported in the multipart part.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Returns the file name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Reads the stream to the end.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the stream cannot be read.
    pub fn read_all(mut self) -> std::io::Result<(Option<String>, Vec<u8>)> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok((self.file_name, bytes))
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// A single request parameter value.
#[derive(Debug)]
pub enum ParamValue {
    /// A plain string.
    Text(String),
    /// A flag, sent as `"true"` or `"false"`.
    Bool(bool),
    /// A list of strings, sent comma-joined.
    List(Vec<String>),
    /// Any other JSON value, sent unchanged.
    Json(Value),
    /// A binary stream, sent as a file part.
    Stream(Upload),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Json(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Json(value.into())
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Upload> for ParamValue {
    fn from(value: Upload) -> Self {
        Self::Stream(value)
    }
}

/// Request parameters keyed by name.
///
/// Setting a name twice keeps the last value.
///
/// # Example
///
/// ```rust
/// use rekognize::Params;
///
/// let params = Params::new()
///     .param("screen_name", "rekognize")
///     .param("include_entities", true)
///     .param("user_id", vec!["12", "34"])
///     .param("count", 20_i64);
///
/// assert_eq!(params.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parameters split into their wire representation.
#[derive(Debug, Default)]
pub struct SanitizedParams {
    /// Values for the query string or JSON body.
    pub params: Map<String, Value>,
    /// Streams for multipart upload.
    pub files: Vec<(String, Upload)>,
}

impl SanitizedParams {
    /// Renders the plain parameters as query pairs.
    ///
    /// Strings are used as-is; other JSON values use their JSON text.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

/// Partitions parameters into plain values and file streams.
///
/// - Streams go to `files`, never to `params`
/// - Booleans become the strings `"true"` / `"false"`
/// - Lists become one comma-joined string
/// - Everything else passes through unchanged
///
/// # Example
///
/// ```rust
/// use rekognize::{sanitize_params, Params};
///
/// let sanitized = sanitize_params(
///     Params::new()
///         .param("trim_user", false)
///         .param("id", vec!["a", "b", "c"]),
/// );
///
/// assert_eq!(sanitized.params["trim_user"], "false");
/// assert_eq!(sanitized.params["id"], "a,b,c");
/// assert!(sanitized.files.is_empty());
/// ```
#[must_use]
pub fn sanitize_params(input: Params) -> SanitizedParams {
    let mut sanitized = SanitizedParams::default();

    for (name, value) in input {
        let value = match value {
            ParamValue::Stream(upload) => {
                sanitized.files.push((name, upload));
                continue;
            }
            ParamValue::Bool(true) => Value::from("true"),
            ParamValue::Bool(false) => Value::from("false"),
            ParamValue::List(items) => Value::from(items.join(",")),
            ParamValue::Text(text) => Value::from(text),
            ParamValue::Json(value) => value,
        };
        sanitized.params.insert(name, value);
    }

    sanitized
}
