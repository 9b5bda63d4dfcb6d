use serde::{Deserialize, Serialize};

/// A customer address as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub customer_id: i64,
    /// Address label, e.g. "work" or "home".
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postalcode: Option<String>,
}
