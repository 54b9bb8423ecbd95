//! HTTP client for console API requests.
//!
//! This module provides a low-level HTTP client wrapper for the list and
//! detail endpoints, handling authentication, query parameters, status checks
//! and response parsing.

use super::{ApiError, Page};
use crate::list::ListQuery;
use log::*;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Makes requests to the console API and conforms response data to models.
///
pub struct Client {
    access_token: Option<String>,
    base_url: Url,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given optional access token and base URL,
    /// or an error if the base URL cannot carry endpoint paths.
    ///
    pub fn new(access_token: Option<&str>, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: cannot hold endpoint paths",
                base_url
            )));
        }
        Ok(Client {
            access_token: access_token.map(str::to_owned),
            base_url,
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Return one page of `resource` for the given effective query.
    ///
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &ListQuery,
    ) -> Result<Page<T>, ApiError> {
        let url = self.endpoint(&[resource])?;
        let response = self
            .request(Method::GET, url)
            .query(&query.params())
            .send()
            .await?;
        let response = check_status(response).await?;
        let page: Page<T> = parse_body(response).await?;
        debug!(
            "Fetched {} page {}: {} records (total {})",
            resource,
            query.page,
            page.results.len(),
            page.total_count
        );
        Ok(page)
    }

    /// Return the record of `resource` with the given id.
    ///
    pub async fn get<T: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<T, ApiError> {
        let not_found = || ApiError::NotFound {
            resource: resource.to_owned(),
            id: id.to_owned(),
        };
        // These ids would address the collection or a parent path instead.
        if matches!(id, "" | "." | "..") {
            warn!("Refusing to request {} record with id {:?}", resource, id);
            return Err(not_found());
        }
        let url = self.endpoint(&[resource, id])?;
        let response = self.request(Method::GET, url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found());
        }
        let response = check_status(response).await?;
        parse_body(response).await
    }

    /// Return the base URL extended by `segments`, each percent-encoded as a
    /// single path segment.
    ///
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Prepare a request for `url`, adding authentication when configured.
    ///
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        let request = self.http_client.request(method, url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Turn a non-success response into an error carrying its body.
///
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("Unable to read response"));
    error!("API request failed with status {}: {}", status, message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Deserialize the response body, logging it when it does not fit the model.
///
async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice::<T>(&bytes).map_err(|e| {
        error!(
            "Failed to deserialize API response: {}. Response body: {}",
            e,
            String::from_utf8_lossy(&bytes)
        );
        ApiError::Deserialization(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        for base_url in ["not a url", "/api", "mailto:ops@example.com"] {
            assert!(
                matches!(
                    Client::new(None, base_url),
                    Err(ApiError::InvalidBaseUrl(_))
                ),
                "accepted {}",
                base_url
            );
        }
    }

    #[test]
    fn test_endpoint_joins_segments() -> Result<(), ApiError> {
        let client = Client::new(None, "http://localhost:8080/api/")?;
        assert_eq!(
            client.endpoint(&["agents"])?.as_str(),
            "http://localhost:8080/api/agents"
        );
        let client = Client::new(None, "http://localhost:8080")?;
        assert_eq!(
            client.endpoint(&["job-orders"])?.as_str(),
            "http://localhost:8080/job-orders"
        );
        Ok(())
    }

    #[test]
    fn test_endpoint_escapes_reserved_characters() -> Result<(), ApiError> {
        let client = Client::new(None, "http://localhost/api")?;
        assert_eq!(
            client.endpoint(&["agents", "7?x=1"])?.as_str(),
            "http://localhost/api/agents/7%3Fx=1"
        );
        assert_eq!(
            client.endpoint(&["agents", "../job-orders"])?.as_str(),
            "http://localhost/api/agents/..%2Fjob-orders"
        );
        assert_eq!(
            client.endpoint(&["agents", "a#b c"])?.as_str(),
            "http://localhost/api/agents/a%23b%20c"
        );
        Ok(())
    }
}
