use serde::Deserialize;

use lugo_core::domain::PropertyStatus;

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: PropertyStatus,
}
