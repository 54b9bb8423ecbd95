mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use crate::list::ListQuery;
use client::Client;
use log::*;

/// Responsible for asynchronous interaction with the console API including
/// transformation of response data into explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL and optional token.
    ///
    pub fn new(access_token: Option<&str>, base_url: &str) -> Result<Api, ApiError> {
        debug!("Initializing API client for {}...", base_url);
        Ok(Api {
            client: Client::new(access_token, base_url)?,
        })
    }

    /// Returns one page of foreign agents.
    ///
    pub async fn agents(&self, query: &ListQuery) -> Result<Page<Agent>, ApiError> {
        debug!("Requesting agents page {}...", query.page);
        self.client.list(Resource::Agents.path(), query).await
    }

    /// Returns one page of job orders.
    ///
    pub async fn job_orders(&self, query: &ListQuery) -> Result<Page<JobOrder>, ApiError> {
        debug!("Requesting job orders page {}...", query.page);
        self.client.list(Resource::JobOrders.path(), query).await
    }

    /// Returns the agent with the given id.
    ///
    pub async fn agent(&self, id: &str) -> Result<Agent, ApiError> {
        debug!("Requesting agent {}...", id);
        self.client.get(Resource::Agents.path(), id).await
    }
}
