use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer or supplier row. Both tables share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Party {
    pub id: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
    Supplier,
    Unknown,
}

/// Outcome of classifying a user identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin,
    Customer(Party),
    Supplier(Party),
    Unknown,
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin => Role::Admin,
            Identity::Customer(_) => Role::Customer,
            Identity::Supplier(_) => Role::Supplier,
            Identity::Unknown => Role::Unknown,
        }
    }

    pub fn record(&self) -> Option<&Party> {
        match self {
            Identity::Customer(party) | Identity::Supplier(party) => Some(party),
            Identity::Admin | Identity::Unknown => None,
        }
    }
}
