use crate::api::{Api, Resource};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::list::{ListController, ListQuery};
use crate::navigation::{History, Location, MemoryHistory};
use crate::state::State;
use crate::ui;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Requested changes to a list location, in the order they are applied:
/// clear, replace filters, set named filters, move page.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    pub at: Option<String>,
    pub clear: bool,
    pub filters: Option<Vec<String>>,
    pub sets: Vec<(String, String)>,
    pub page: Option<i64>,
}

/// Specify the commands the console runs.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { resource: Resource, edit: Edit },
    Url { resource: Resource, edit: Edit },
    Show { id: String },
}

/// List view bound to one resource: its location path and the controller over
/// the location's query.
///
#[derive(Debug)]
pub struct ListView {
    resource: Resource,
    path: String,
    list: ListController<MemoryHistory>,
}

impl ListView {
    /// Open the view at `at`, or at the resource's unfiltered first page.
    /// A location whose path names another list is a usage error.
    ///
    pub fn open(resource: Resource, at: Option<&str>) -> AppResult<ListView> {
        let location = Location::parse(at.unwrap_or(resource.path()));
        if location.path.trim_matches('/') != resource.path() {
            return Err(AppError::Usage(format!(
                "location '{}' does not belong to the {} list (expected path /{})",
                location,
                resource,
                resource.path()
            )));
        }
        Ok(ListView {
            resource,
            path: location.path,
            list: ListController::new(
                MemoryHistory::with_query(location.query),
                resource.fields().len(),
            ),
        })
    }

    /// Apply `edit` through the controller. Every filter change is coalesced
    /// into a single update.
    ///
    pub fn apply(&mut self, edit: &Edit) -> AppResult<()> {
        if edit.clear {
            self.list.clear();
        }
        if edit.filters.is_some() || !edit.sets.is_empty() {
            let values = self.coalesce(edit)?;
            self.list.update(&values);
        }
        if let Some(page) = edit.page {
            self.list.set_page(page);
        }
        Ok(())
    }

    fn coalesce(&self, edit: &Edit) -> AppResult<Vec<String>> {
        let fields = self.resource.fields();
        let slots = self.list.field_count();
        let mut values = match &edit.filters {
            Some(filters) => {
                if filters.len() > slots {
                    return Err(AppError::Usage(format!(
                        "{} accepts at most {} filters ({}), got {}",
                        self.resource,
                        slots,
                        fields.join(", "),
                        filters.len()
                    )));
                }
                let mut values = filters.clone();
                values.resize(slots, String::new());
                values
            }
            None => self.list.read().0,
        };
        for (name, value) in &edit.sets {
            let index = fields.iter().position(|f| *f == name.as_str()).ok_or_else(|| {
                AppError::Usage(format!(
                    "unknown {} filter '{}', expected one of: {}",
                    self.resource,
                    name,
                    fields.join(", ")
                ))
            })?;
            values[index] = value.clone();
        }
        Ok(values)
    }

    /// Return the shareable location for the current state.
    ///
    pub fn location(&self) -> Location {
        Location::new(&self.path, self.list.history().query())
    }

    pub fn query(&self, page_size: u64) -> ListQuery {
        self.list.query(self.resource.fields(), page_size)
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }
}

/// Oversees command execution, state management, and terminal output.
///
pub struct App {
    config: Config,
    state: Arc<Mutex<State>>,
}

impl App {
    pub fn new(config: Config) -> App {
        App {
            config,
            state: Arc::new(Mutex::new(State::new())),
        }
    }

    /// Run one command according to the given configuration.
    ///
    pub async fn start(config: Config, command: Command) -> Result<()> {
        info!("Starting application...");
        let app = App::new(config);
        match command {
            Command::Url { resource, edit } => {
                let mut view = ListView::open(resource, edit.at.as_deref())?;
                view.apply(&edit)?;
                println!("{}", view.location());
            }
            Command::List { resource, edit } => {
                let mut view = ListView::open(resource, edit.at.as_deref())?;
                view.apply(&edit)?;
                app.list(&view).await?;
            }
            Command::Show { id } => app.show(id).await?,
        }
        info!("Exiting application...");
        Ok(())
    }

    /// Fetch and print the page the view points at.
    ///
    async fn list(&self, view: &ListView) -> Result<()> {
        let api = self.api()?;
        let query = view.query(self.config.page_size);
        let resource = view.resource();
        let ticket = self.state.lock().await.begin_load(resource, &query);
        if let Some(ticket) = ticket {
            let event = match resource {
                Resource::Agents => NetworkEvent::Agents {
                    query: query.clone(),
                    ticket,
                },
                Resource::JobOrders => NetworkEvent::JobOrders {
                    query: query.clone(),
                    ticket,
                },
            };
            NetworkEventHandler::new(&self.state, &api)
                .handle(event)
                .await?;
        }

        println!("Location: {}", view.location());
        let mut state = self.state.lock().await;
        match resource {
            Resource::Agents => {
                if let Ok(page) = state.get_agents() {
                    println!("{}", ui::agents_table(page));
                    println!("{}", ui::pager_line(page, query.page, query.page_size));
                }
            }
            Resource::JobOrders => {
                if let Ok(page) = state.get_job_orders() {
                    println!("{}", ui::job_orders_table(page));
                    println!("{}", ui::pager_line(page, query.page, query.page_size));
                }
            }
        }
        for toast in state.take_toasts() {
            eprintln!("{}", ui::toast_line(&toast));
        }
        Ok(())
    }

    /// Fetch and print one agent.
    ///
    async fn show(&self, id: String) -> Result<()> {
        let api = self.api()?;
        NetworkEventHandler::new(&self.state, &api)
            .handle(NetworkEvent::Agent { id })
            .await?;
        let mut state = self.state.lock().await;
        if let Ok(agent) = state.get_agent() {
            println!("{}", ui::agent_detail(agent));
        }
        for toast in state.take_toasts() {
            eprintln!("{}", ui::toast_line(&toast));
        }
        Ok(())
    }

    fn api(&self) -> AppResult<Api> {
        Ok(Api::new(
            self.config.access_token.as_deref(),
            &self.config.base_url,
        )?)
    }
}
