//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No page has been loaded for the resource
    #[error("No {resource} page loaded")]
    PageNotLoaded { resource: String },

    /// No detail record has been loaded
    #[error("No {resource} record loaded")]
    RecordNotLoaded { resource: String },
}
