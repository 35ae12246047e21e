/// Common error type for catalog lookups and shell transitions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("unknown signal id: {0}")]
    UnknownSignal(u32),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("no signal selected")]
    NoSelection,
}

pub type DashboardResult<T> = Result<T, DashboardError>;
