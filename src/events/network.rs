use crate::api::{Api, Resource};
use crate::list::{ListQuery, Ticket};
use crate::state::{State, Toast};
use anyhow::Result;
use log::*;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Agents { query: ListQuery, ticket: Ticket },
    JobOrders { query: ListQuery, ticket: Ticket },
    Agent { id: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a Api,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a Api) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type. Data-source failures end up as toasts
    /// in state rather than as errors.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        self.state.lock().await.start_loading();
        match event {
            Event::Agents { query, ticket } => self.agents(query, ticket).await,
            Event::JobOrders { query, ticket } => self.job_orders(query, ticket).await,
            Event::Agent { id } => self.agent(id).await,
        }
        self.state.lock().await.finish_loading();
        Ok(())
    }

    /// Update state with a page of agents.
    ///
    async fn agents(&mut self, query: ListQuery, ticket: Ticket) {
        info!("Fetching agents page {}...", query.page);
        match self.api.agents(&query).await {
            Ok(page) => {
                let mut state = self.state.lock().await;
                if state.accepts(Resource::Agents, ticket) {
                    info!("Received {} agents.", page.results.len());
                    let pages = page.page_count(query.page_size);
                    if let Some(toast) = past_last_page(&query, pages) {
                        state.push_toast(toast);
                    }
                    state.set_agents(page);
                }
            }
            Err(e) => self.fail("Failed to load agents", &e).await,
        }
    }

    /// Update state with a page of job orders.
    ///
    async fn job_orders(&mut self, query: ListQuery, ticket: Ticket) {
        info!("Fetching job orders page {}...", query.page);
        match self.api.job_orders(&query).await {
            Ok(page) => {
                let mut state = self.state.lock().await;
                if state.accepts(Resource::JobOrders, ticket) {
                    info!("Received {} job orders.", page.results.len());
                    let pages = page.page_count(query.page_size);
                    if let Some(toast) = past_last_page(&query, pages) {
                        state.push_toast(toast);
                    }
                    state.set_job_orders(page);
                }
            }
            Err(e) => self.fail("Failed to load job orders", &e).await,
        }
    }

    /// Update state with agent details.
    ///
    async fn agent(&mut self, id: String) {
        info!("Fetching agent {}...", id);
        match self.api.agent(&id).await {
            Ok(agent) => {
                self.state.lock().await.set_agent(agent);
            }
            Err(e) => self.fail(&format!("Failed to load agent {}", id), &e).await,
        }
    }

    /// Log the failure with its cause chain and notify the user.
    ///
    async fn fail(&mut self, context: &str, e: &(dyn Error + 'static)) {
        error!("{}: {}", context, e);
        let mut source = e.source();
        while let Some(err) = source {
            error!("  Caused by: {}", err);
            source = err.source();
        }
        self.state
            .lock()
            .await
            .push_toast(Toast::error(format!("{}: {}", context, e)));
    }
}

/// Pages beyond the end are not clamped; tell the user where the data ends.
///
fn past_last_page(query: &ListQuery, pages: u64) -> Option<Toast> {
    if query.page <= pages {
        return None;
    }
    warn!("Requested page {} of {} pages", query.page, pages);
    Some(Toast::info(format!(
        "Page {} is past the last page ({})",
        query.page, pages
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastLevel;
    use httpmock::MockServer;
    use serde_json::json;

    fn query(page: u64) -> ListQuery {
        ListQuery::new(&["name"], &["acme"], page, 20)
    }

    #[tokio::test]
    async fn agents_stored_in_state() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/agents").query_param("name", "acme");
                then.status(200).json_body(json!({
                    "results": [{ "id": "1", "name": "Acme Manpower" }],
                    "totalCount": 1
                }));
            })
            .await;

        let api = Api::new(None, &server.base_url())?;
        let state = Arc::new(Mutex::new(State::new()));
        let ticket = state.lock().await.force_load(Resource::Agents, &query(1));
        Handler::new(&state, &api)
            .handle(Event::Agents {
                query: query(1),
                ticket,
            })
            .await?;
        mock.assert_async().await;

        let state = state.lock().await;
        assert_eq!(state.get_agents()?.results[0].name, "Acme Manpower");
        assert!(!state.is_loading());
        assert!(state.get_toasts().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn stale_response_dropped() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/job-orders");
                then.status(200).json_body(json!({ "results": [], "totalCount": 0 }));
            })
            .await;

        let api = Api::new(None, &server.base_url())?;
        let state = Arc::new(Mutex::new(State::new()));
        let stale = state.lock().await.force_load(Resource::JobOrders, &query(1));
        state.lock().await.force_load(Resource::JobOrders, &query(2));
        Handler::new(&state, &api)
            .handle(Event::JobOrders {
                query: query(1),
                ticket: stale,
            })
            .await?;

        assert!(state.lock().await.get_job_orders().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn page_past_end_raises_info_toast() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/agents").query_param("page", "9");
                then.status(200).json_body(json!({ "results": [], "totalCount": 45 }));
            })
            .await;

        let api = Api::new(None, &server.base_url())?;
        let state = Arc::new(Mutex::new(State::new()));
        let ticket = state.lock().await.force_load(Resource::Agents, &query(9));
        Handler::new(&state, &api)
            .handle(Event::Agents {
                query: query(9),
                ticket,
            })
            .await?;

        let mut state = state.lock().await;
        assert_eq!(state.get_agents()?.total_count, 45);
        let toasts = state.take_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Info);
        assert_eq!(toasts[0].message, "Page 9 is past the last page (3)");
        Ok(())
    }

    #[tokio::test]
    async fn failure_becomes_toast() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/agents/9");
                then.status(404);
            })
            .await;

        let api = Api::new(None, &server.base_url())?;
        let state = Arc::new(Mutex::new(State::new()));
        Handler::new(&state, &api)
            .handle(Event::Agent { id: "9".to_string() })
            .await?;

        let mut state = state.lock().await;
        assert!(state.get_agent().is_err());
        let toasts = state.take_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Error);
        assert!(toasts[0].message.contains("Failed to load agent 9"));
        Ok(())
    }
}
