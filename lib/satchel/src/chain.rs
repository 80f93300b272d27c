//! Applying several encoders to one request.
//!
//! A request usually gets its parameters from more than one encoder, e.g. a
//! query string plus a JSON body. [`EncoderChain`] runs them in order and logs
//! what each one contributes using the `tracing` crate.

use std::fmt;

use satchel_core::{ParametersEncoder, Request, Result};
use tracing::{Level, debug, info, span, warn};

use crate::config::{EncoderConfig, LogLevel};

/// Ordered list of encoders applied one after the other.
///
/// The request value is threaded through every encoder; the first failure
/// stops the chain and is returned as is.
///
/// # Example
///
/// ```
/// use satchel::{EncoderChain, JsonBody, ParametersEncoder, QueryParameters, Request};
///
/// let chain = EncoderChain::new()
///     .encoder(QueryParameters::new([("dry_run", true)]))
///     .encoder(JsonBody::new(vec![1, 2, 3]));
///
/// let request = chain
///     .encode(Request::parse("https://api.example.com/items").expect("url"))
///     .expect("encode");
///
/// assert_eq!(request.url().and_then(|url| url.query()), Some("dry_run=true"));
/// assert_eq!(request.header("content-type"), Some("application/json"));
/// ```
#[derive(Default)]
pub struct EncoderChain {
    encoders: Vec<Box<dyn ParametersEncoder>>,
    config: EncoderConfig,
}

impl fmt::Debug for EncoderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderChain")
            .field("encoders", &self.encoders.len())
            .field("config", &self.config)
            .finish()
    }
}

impl EncoderChain {
    /// Create an empty chain with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chain with the given configuration.
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            encoders: Vec::new(),
            config,
        }
    }

    /// Append an encoder, builder style.
    #[must_use]
    pub fn encoder(mut self, encoder: impl ParametersEncoder + 'static) -> Self {
        self.push(encoder);
        self
    }

    /// Append an encoder.
    pub fn push(&mut self, encoder: impl ParametersEncoder + 'static) {
        self.encoders.push(Box::new(encoder));
    }

    /// Number of encoders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    /// Returns `true` if the chain has no encoders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// The chain configuration.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn log_parameters(&self, index: usize, encoder: &dyn ParametersEncoder) {
        if !self.config.log_descriptions {
            return;
        }
        let description = encoder.log_description();
        let description = description
            .as_deref()
            .map(|text| truncate(text, self.config.max_description_len));
        let description = description.as_deref().unwrap_or("<no description>");

        match self.config.log_level {
            LogLevel::Debug => debug!(index, parameters = %description, "encoding parameters"),
            LogLevel::Info => info!(index, parameters = %description, "encoding parameters"),
        }
    }
}

impl FromIterator<Box<dyn ParametersEncoder>> for EncoderChain {
    fn from_iter<I: IntoIterator<Item = Box<dyn ParametersEncoder>>>(iter: I) -> Self {
        Self {
            encoders: iter.into_iter().collect(),
            config: EncoderConfig::default(),
        }
    }
}

impl ParametersEncoder for EncoderChain {
    fn encode(&self, request: Request) -> Result<Request> {
        let url = request.url().map_or("<none>", url::Url::as_str);
        let span = span!(Level::DEBUG, "encode_parameters", %url, encoders = self.encoders.len());
        let _entered = span.enter();

        let mut request = request;
        for (index, encoder) in self.encoders.iter().enumerate() {
            self.log_parameters(index, encoder.as_ref());
            request = encoder.encode(request).inspect_err(|err| {
                warn!(index, error = %err, "parameter encoding failed");
            })?;
        }
        Ok(request)
    }

    fn log_description(&self) -> Option<String> {
        let descriptions = self
            .encoders
            .iter()
            .filter_map(|encoder| encoder.log_description())
            .collect::<Vec<_>>();
        if descriptions.is_empty() {
            None
        } else {
            Some(descriptions.join("\n"))
        }
    }
}

/// Cut `text` to at most `max` characters, marking the cut.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => {
            let (head, _) = text.split_at(end);
            format!("{head}... ({} bytes total)", text.len())
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use satchel_core::{Error, ImageParameter, JsonBody, MultipartBody, QueryParameters};

    use super::*;

    fn request() -> Request {
        Request::parse("http://test.com/upload").expect("valid URL")
    }

    fn with_subscriber<T>(f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    #[test]
    fn empty_chain_is_identity() {
        let chain = EncoderChain::new();
        check!(chain.is_empty());
        check!(chain.encode(request()).expect("encode") == request());
        check!(chain.log_description().is_none());
    }

    #[test]
    fn encoders_run_in_order() {
        let chain = EncoderChain::new()
            .encoder(ImageParameter::new("image", "a.jpg"))
            .encoder(JsonBody::new(42));
        check!(chain.len() == 2);

        let output = with_subscriber(|| chain.encode(request())).expect("encode");

        // The JSON encoder ran last, so its body and content type win
        check!(output.header("content-type") == Some("application/json"));
        check!(output.body().map(|b| &b[..]) == Some(&b"42"[..]));
    }

    #[test]
    fn first_failure_stops_the_chain() {
        let chain = EncoderChain::new()
            .encoder(QueryParameters::new([("page", 1)]))
            .encoder(JsonBody::new(1));

        let result = with_subscriber(|| chain.encode(Request::without_url()));
        let_assert!(Err(Error::MissingUrl) = result);
    }

    #[test]
    fn multipart_failure_is_reported() {
        let chain = EncoderChain::with_config(
            EncoderConfig::builder().log_level(LogLevel::Info).build(),
        )
        .encoder(MultipartBody::new().part(JsonBody::new("unnamed")));

        let result = with_subscriber(|| chain.encode(request()));
        let_assert!(Err(Error::MultipartNameMissing) = result);
    }

    #[test]
    fn logging_can_be_disabled() {
        let mut chain =
            EncoderChain::with_config(EncoderConfig::builder().log_descriptions(false).build());
        chain.push(JsonBody::new("quiet"));

        check!(!chain.config().log_descriptions);
        let output = with_subscriber(|| chain.encode(request())).expect("encode");
        check!(output.body().map(|b| &b[..]) == Some(&b"\"quiet\""[..]));
    }

    #[test]
    fn chain_description_joins_members() {
        let chain = EncoderChain::new()
            .encoder(QueryParameters::new([("page", 1)]))
            .encoder(MultipartBody::new())
            .encoder(ImageParameter::new("abc", "a.jpg"));

        insta::assert_snapshot!(chain.log_description().expect("description"), @r"
        page = 1
        <image: 3 bytes>
        ");
    }

    #[test]
    fn chain_from_boxed_encoders() {
        let encoders: Vec<Box<dyn ParametersEncoder>> = vec![
            Box::new(JsonBody::new(1)),
            Box::new(QueryParameters::new([("a", "b")])),
        ];
        let chain = encoders.into_iter().collect::<EncoderChain>();
        check!(chain.len() == 2);
        check!(chain.config() == &EncoderConfig::default());
    }

    #[test]
    fn truncate_long_text() {
        check!(truncate("short", 10) == "short");
        check!(truncate("exactly", 7) == "exactly");
        check!(truncate("abcdefgh", 3) == "abc... (8 bytes total)");
        check!(truncate("ééé", 1) == "é... (6 bytes total)");
    }
}
