//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SKIP};

/// Offset/limit window for list endpoints.
///
/// Plain offset pagination: callers must tolerate shifted windows under
/// concurrent inserts and deletes.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of records to skip
    #[serde(default = "default_skip")]
    pub skip: u64,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_LIST_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: DEFAULT_LIST_SKIP,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}
