//! Stock balance and under-stock alerts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{database::Database, models::Product, services::activity::UnitsByProduct};

/// A catalog product whose balance fell below its minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockAlert {
    pub name: String,
    pub location: String,
    pub threshold: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub balances: BTreeMap<String, i64>,
    pub alerts: Vec<StockAlert>,
}

pub async fn product_catalog(db: &Database) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT name,
               CAST(COALESCE(initialstock, 0) AS INTEGER) AS initial_stock,
               CAST(COALESCE(minimumstock, 0) AS INTEGER) AS minimum_stock,
               COALESCE(location, '') AS location
        FROM products
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

/// Inbound minus outbound units per product over the reporting period.
pub fn net_movement(outbound: &UnitsByProduct, inbound: &UnitsByProduct) -> BTreeMap<String, i64> {
    let mut net: BTreeMap<String, i64> = inbound.clone();
    for (product, units) in outbound {
        *net.entry(product.clone()).or_insert(0) -= units;
    }
    net
}

/// Applies the period's movements to each product's initial stock.
///
/// Every catalog product gets a balance, as does any product that only appears in
/// the movements. Alerts are raised for catalog products, in catalog order, whose
/// balance is strictly below their minimum stock.
pub fn balance(outbound: &UnitsByProduct, inbound: &UnitsByProduct, catalog: &[Product]) -> InventoryReport {
    let mut balances = net_movement(outbound, inbound);
    for product in catalog {
        *balances.entry(product.name.clone()).or_insert(0) += product.initial_stock;
    }

    let alerts = catalog
        .iter()
        .filter_map(|product| {
            let balance = balances.get(&product.name).copied()?;
            (balance < product.minimum_stock).then(|| StockAlert {
                name: product.name.clone(),
                location: product.location.clone(),
                threshold: product.minimum_stock,
                balance,
            })
        })
        .collect();

    InventoryReport { balances, alerts }
}
