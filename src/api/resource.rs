use super::ApiError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines foreign agent data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>, // ISO timestamp
}

/// Defines job order data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: String,
    pub agent_id: String,
    pub position: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: String,
}

/// Defines one page of a list endpoint response.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Number of pages needed for `total_count` records, never less than 1.
    ///
    pub fn page_count(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 1;
        }
        ((self.total_count + page_size - 1) / page_size).max(1)
    }
}

/// Specifying the listable resources.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Resource {
    Agents,
    JobOrders,
}

impl Resource {
    /// Endpoint path segment, also used as the location path.
    ///
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Agents => "agents",
            Resource::JobOrders => "job-orders",
        }
    }

    /// Filterable fields in positional slot order.
    ///
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Resource::Agents => &["name", "company", "country", "status"],
            Resource::JobOrders => &["agentId", "position", "status"],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Resource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_matches('/') {
            "agents" => Ok(Resource::Agents),
            "job-orders" | "job_orders" => Ok(Resource::JobOrders),
            other => Err(ApiError::UnknownResource(other.to_string())),
        }
    }
}
