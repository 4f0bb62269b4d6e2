//! Values captured by a successful match.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

/// Reserved key holding the full inbound URL.
pub const URL_KEY: &str = "matched-route-url";

/// Reserved key holding the name of the originating context, when there is one.
pub const SOURCE_KEY: &str = "matched-route-source";

/// Placeholder bindings for one dispatch, plus the reserved entries.
///
/// Created per inbound link and dropped once the route's action returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchedValues {
    values: BTreeMap<String, String>,
}

impl MatchedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a value and parse it, returning `None` if it is missing or
    /// does not parse.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// The full inbound URL.
    pub fn url(&self) -> Option<&str> {
        self.get(URL_KEY)
    }

    /// The originating context name.
    pub fn source(&self) -> Option<&str> {
        self.get(SOURCE_KEY)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MatchedValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
