//! Typed client for the daemon API. Each endpoint module implements
//! `ApiRequest` for its request type; the CLI drives everything through
//! `ApiClient::call`.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}
