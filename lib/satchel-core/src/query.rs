//! URL query string encoder.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::{ParametersEncoder, Request, Result};

/// Encodes a key/value mapping as the query string of the request URL.
///
/// Keys are unique and kept sorted, so the generated query string is
/// deterministic. Values only need to implement [`Display`].
///
/// # Example
///
/// ```
/// use satchel_core::{ParametersEncoder, QueryParameters, Request};
///
/// let params = QueryParameters::new([("page", 2), ("limit", 10)]);
/// let request = params
///     .encode(Request::parse("https://api.example.com/users").expect("url"))
///     .expect("encode");
///
/// assert_eq!(
///     request.url().map(|url| url.as_str()),
///     Some("https://api.example.com/users?limit=10&page=2")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters<V> {
    parameters: BTreeMap<String, V>,
}

impl<V> QueryParameters<V> {
    /// Build from key/value pairs. A repeated key keeps its last value.
    #[must_use]
    pub fn new<K>(parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
    {
        parameters.into_iter().collect()
    }

    /// The parameters, sorted by key.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, V> {
        &self.parameters
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl<V> Default for QueryParameters<V> {
    fn default() -> Self {
        Self {
            parameters: BTreeMap::new(),
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for QueryParameters<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V> ParametersEncoder for QueryParameters<V>
where
    V: Display + Send + Sync,
{
    fn encode(&self, mut request: Request) -> Result<Request> {
        if self.parameters.is_empty() {
            return Ok(request);
        }
        let mut url = request.url().cloned().ok_or(crate::Error::MissingUrl)?;

        // Replaces whatever query the URL already had
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in &self.parameters {
                query.append_pair(name, &value.to_string());
            }
        }

        request.set_url(url);
        Ok(request)
    }

    fn log_description(&self) -> Option<String> {
        let lines = self
            .parameters
            .iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>();
        Some(lines.join("\n"))
    }
}
