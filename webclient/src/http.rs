use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;

pub use ::reqwest::{Error, IntoUrl, Response, StatusCode};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("codecracker-webclient/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct Client {
    inner: ::reqwest::Client,
}

pub struct RequestBuilder {
    inner: ::reqwest::RequestBuilder,
}

macro_rules! emit_request_fn {
    ($method:ident) => {
        pub fn $method(&self, u: impl IntoUrl) -> RequestBuilder {
            RequestBuilder::new(self.inner.$method(u))
        }
    };
}

impl Client {
    /// Upstreams specify no timeout themselves; every call gets a bounded
    /// one so a hung connection surfaces as a network failure.
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: reqwest::Client::builder()
                .gzip(true)
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
        }
    }

    emit_request_fn!(get);
    emit_request_fn!(post);
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl RequestBuilder {
    fn new(b: ::reqwest::RequestBuilder) -> Self {
        Self { inner: b }
    }

    pub async fn send(self) -> Result<Response, Error> {
        self.inner.send().await
    }

    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.inner = self.inner.json(json);
        self
    }

    pub fn header<K, V>(self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<::http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<::http::Error>,
    {
        Self::new(self.inner.header(key, value))
    }
}
