use super::{StateError, Toast};
use crate::api::{Agent, JobOrder, Page, Resource};
use crate::list::{ListQuery, Loader, Ticket};
use log::*;

/// Houses the client-side cache of fetched records.
///
#[derive(Debug, Default)]
pub struct State {
    agents: Option<Page<Agent>>,
    job_orders: Option<Page<JobOrder>>,
    agent: Option<Agent>, // Currently viewed agent detail
    agents_loader: Loader,
    job_orders_loader: Loader,
    loading: usize, // Requests in flight
    toasts: Vec<Toast>,
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    /// Ask whether the list of `resource` must be fetched for `query`.
    ///
    pub fn begin_load(&mut self, resource: Resource, query: &ListQuery) -> Option<Ticket> {
        self.loader_mut(resource).begin(query)
    }

    /// Issue a ticket for `resource` even if the query is unchanged.
    ///
    pub fn force_load(&mut self, resource: Resource, query: &ListQuery) -> Ticket {
        self.loader_mut(resource).force(query)
    }

    /// Whether a response for `resource` carrying `ticket` may be stored.
    ///
    pub fn accepts(&self, resource: Resource, ticket: Ticket) -> bool {
        match resource {
            Resource::Agents => self.agents_loader.accept(ticket),
            Resource::JobOrders => self.job_orders_loader.accept(ticket),
        }
    }

    /// Forget the last requested query for `resource`, so the next load fetches.
    ///
    pub fn invalidate(&mut self, resource: Resource) -> &mut Self {
        self.loader_mut(resource).reset();
        self
    }

    fn loader_mut(&mut self, resource: Resource) -> &mut Loader {
        match resource {
            Resource::Agents => &mut self.agents_loader,
            Resource::JobOrders => &mut self.job_orders_loader,
        }
    }

    pub fn set_agents(&mut self, page: Page<Agent>) -> &mut Self {
        self.agents = Some(page);
        self
    }

    pub fn get_agents(&self) -> Result<&Page<Agent>, StateError> {
        self.agents.as_ref().ok_or(StateError::PageNotLoaded {
            resource: Resource::Agents.to_string(),
        })
    }

    pub fn set_job_orders(&mut self, page: Page<JobOrder>) -> &mut Self {
        self.job_orders = Some(page);
        self
    }

    pub fn get_job_orders(&self) -> Result<&Page<JobOrder>, StateError> {
        self.job_orders.as_ref().ok_or(StateError::PageNotLoaded {
            resource: Resource::JobOrders.to_string(),
        })
    }

    pub fn set_agent(&mut self, agent: Agent) -> &mut Self {
        self.agent = Some(agent);
        self
    }

    pub fn get_agent(&self) -> Result<&Agent, StateError> {
        self.agent.as_ref().ok_or(StateError::RecordNotLoaded {
            resource: Resource::Agents.to_string(),
        })
    }

    pub fn start_loading(&mut self) -> &mut Self {
        self.loading += 1;
        self
    }

    pub fn finish_loading(&mut self) -> &mut Self {
        self.loading = self.loading.saturating_sub(1);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    pub fn push_toast(&mut self, toast: Toast) -> &mut Self {
        debug!("Queueing toast: {}", toast);
        self.toasts.push(toast);
        self
    }

    pub fn get_toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Remove and return every queued toast.
    ///
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}
