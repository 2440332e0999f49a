//! HTTP feed speaking the image API's JSON protocol

use crate::feed::source::{CategorySource, PageRequest, PageSource};
use crate::feed::wire::{CategoryResponse, PageResponse};
use crate::io::configuration::QueryKeys;
use crate::io::error::{Result, WallError};
use crate::wall::category::Category;
use crate::wall::fragment::ImageDescriptor;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

/// Image and category endpoints of a remote backend
pub struct HttpFeed {
    client: reqwest::Client,
    api_url: String,
    categories_url: String,
    query_keys: QueryKeys,
}

impl HttpFeed {
    /// Create a feed for `api_url`; categories default to `<api_url>/categories`
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be constructed
    pub fn new(
        api_url: impl Into<String>,
        categories_url: Option<String>,
        query_keys: QueryKeys,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_url = api_url.into();
        let categories_url =
            categories_url.unwrap_or_else(|| Self::default_categories_url(&api_url));

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WallError::from_request(&api_url, e))?;

        Ok(Self {
            client,
            api_url,
            categories_url,
            query_keys,
        })
    }

    /// `<api_url>/categories`
    pub fn default_categories_url(api_url: &str) -> String {
        format!("{}/categories", api_url.trim_end_matches('/'))
    }

    /// Image endpoint
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Category endpoint
    pub fn categories_url(&self) -> &str {
        &self.categories_url
    }

    /// Query pairs sent for a page request
    pub fn query_pairs(&self, request: &PageRequest) -> [(&'static str, String); 3] {
        [
            (self.query_keys.category, request.category.clone()),
            (self.query_keys.offset, request.offset.to_string()),
            (self.query_keys.count, request.count.to_string()),
        ]
    }
}

#[async_trait]
impl PageSource for HttpFeed {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ImageDescriptor>> {
        debug!("GET {} {:?}", self.api_url, request);
        let response = self
            .client
            .get(&self.api_url)
            .query(&self.query_pairs(request))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| WallError::from_request(&self.api_url, e))?;

        let body: PageResponse = response
            .json()
            .await
            .map_err(|e| WallError::from_request(&self.api_url, e))?;
        body.into_images()
    }
}

#[async_trait]
impl CategorySource for HttpFeed {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        debug!("GET {}", self.categories_url);
        let response = self
            .client
            .get(&self.categories_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| WallError::from_request(&self.categories_url, e))?;

        let body: CategoryResponse = response
            .json()
            .await
            .map_err(|e| WallError::from_request(&self.categories_url, e))?;
        body.into_categories()
    }
}
