use serde::{Deserialize, Serialize};

/// Administrative region. `code` is the filter key used by every list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: u64,
    pub name: String,
    pub code: String,
}
