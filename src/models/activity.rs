use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Direction of a stock movement, as stored in `activity.inout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Purchase from a supplier.
    Inbound,
    /// Sale to a customer.
    Outbound,
}

impl Direction {
    pub fn code(self) -> &'static str {
        match self {
            Direction::Inbound => "C",
            Direction::Outbound => "V",
        }
    }
}

/// One activity row joined to its product name.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ActivityRow {
    pub product: String,
    pub price: f64,
}

/// First and last activity dates, used for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Period {
    pub initial: Option<String>,
    pub last: Option<String>,
}
