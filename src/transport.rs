//! Transport abstraction
//!
//! The only thing a sequence needs from the network: GET a URL and hand back
//! the parsed JSON body. `HttpClient` is the production implementation; tests
//! plug in scripted transports.

use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::sync::Arc;

/// A GET-capable JSON transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return its JSON body
    async fn get(&self, url: &str) -> Result<JsonValue>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<JsonValue> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, url: &str) -> Result<JsonValue> {
        (**self).get(url).await
    }
}
