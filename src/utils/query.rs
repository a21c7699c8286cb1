//! Query string construction
//!
//! Serializes optional request parameters into a URL query string,
//! skipping absent values and keeping insertion order.

use std::fmt;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => write!(f, "{}", s),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Float(v) => write!(f, "{}", v),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// Parameter structs that can be sent as a query string
pub trait ToQueryPairs {
    /// Ordered (name, value) pairs; `None` marks an absent parameter
    fn query_pairs(&self) -> Vec<(&'static str, Option<QueryValue>)>;

    fn to_query_string(&self) -> String {
        build_query_string(self.query_pairs())
    }
}

/// Convert an optional value into an optional query value
pub fn opt<T: Into<QueryValue>>(value: Option<T>) -> Option<QueryValue> {
    value.map(Into::into)
}

/// Build a query string from ordered parameters.
///
/// Returns an empty string when every value is absent, otherwise the
/// form-encoded pairs prefixed with `?`.
pub fn build_query_string<K, I>(params: I) -> String
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Option<QueryValue>)>,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key.as_ref(), &value.to_string());
            any = true;
        }
    }

    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_absent_and_keeps_order() {
        let qs = build_query_string(vec![
            ("a", Some(QueryValue::Int(1))),
            ("b", None),
            ("c", Some(QueryValue::from("x"))),
        ]);
        assert_eq!(qs, "?a=1&c=x");
    }

    #[test]
    fn test_empty_input() {
        let params: Vec<(&str, Option<QueryValue>)> = Vec::new();
        assert_eq!(build_query_string(params), "");
        assert_eq!(build_query_string(vec![("a", None)]), "");
    }

    #[test]
    fn test_stringifies_values() {
        let qs = build_query_string(vec![
            ("isRegistrationOpen", Some(QueryValue::Bool(true))),
            ("limit", opt(Some(10u32))),
            ("ratio", Some(QueryValue::Float(1.5))),
        ]);
        assert_eq!(qs, "?isRegistrationOpen=true&limit=10&ratio=1.5");
    }

    #[test]
    fn test_encodes_values() {
        let qs = build_query_string(vec![("searchFilter", Some(QueryValue::from("music & arts")))]);
        assert_eq!(qs, "?searchFilter=music+%26+arts");
    }
}
