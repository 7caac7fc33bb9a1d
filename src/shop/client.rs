//! Blocking HTTP client for the shop server.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ShopSettings;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("shop returned status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of a successful `POST /add-to-cart/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartUpdate {
    pub message: String,
    pub cart_total: u32,
}

/// One entry of `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteProduct {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

/// One entry of `GET /api/playlist`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTrack {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub cover: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone)]
pub struct ShopClient {
    http: Client,
    base_url: String,
}

impl ShopClient {
    pub fn new(settings: &ShopSettings) -> Result<Self, ShopError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        // The shop keeps the cart in its session cookie.
        let mut builder = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(settings.timeout_ms));
        // A shop on this machine is reached directly even when a proxy is configured.
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add one unit of `product_id` to the session cart.
    ///
    /// The request carries no body; the server defaults the quantity to 1.
    pub fn add_to_cart(&self, product_id: &str) -> Result<CartUpdate, ShopError> {
        let url = format!("{}/add-to-cart/{}", self.base_url, product_id);
        debug!(%url, "add to cart");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()?;
        Self::decode(response)
    }

    pub fn products(&self) -> Result<Vec<RemoteProduct>, ShopError> {
        self.get_json("/api/products")
    }

    pub fn playlist(&self) -> Result<Vec<RemoteTrack>, ShopError> {
        self.get_json("/api/playlist")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ShopError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetch");
        let response = self.http.get(&url).send()?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ShopError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ShopError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn is_loopback(base_url: &str) -> bool {
    let authority = base_url
        .split_once("://")
        .map_or(base_url, |(_, rest)| rest)
        .split('/')
        .next()
        .unwrap_or_default();
    authority == "localhost"
        || authority.starts_with("localhost:")
        || authority.starts_with("127.")
        || authority.starts_with("[::1]")
}
