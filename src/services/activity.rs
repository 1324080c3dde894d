//! Per-product aggregation of activity rows.

use std::collections::BTreeMap;

use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::{
    database::Database,
    models::{ActivityRow, Direction},
};

/// Units moved per product name. Products with no rows are absent.
pub type UnitsByProduct = BTreeMap<String, i64>;

/// Summed prices per product name. Products with no rows are absent.
pub type ValuesByProduct = BTreeMap<String, Decimal>;

/// Fetches activity rows joined to their product names.
///
/// `party` of `None` or `Some("")` selects every party; `direction` of `None`
/// selects both directions.
pub async fn query_activity(
    db: &Database,
    party: Option<&str>,
    direction: Option<Direction>,
) -> Result<Vec<ActivityRow>, sqlx::Error> {
    let party = party.filter(|p| !p.is_empty());

    let mut conditions = vec!["activity.idproduct = products.id".to_string()];
    if direction.is_some() {
        conditions.push("activity.inout = ?".to_string());
    }
    if party.is_some() {
        conditions.push("activity.idsuppocust = ?".to_string());
    }

    let query_sql = format!(
        r#"
        SELECT products.name AS product,
               CAST(COALESCE(activity.price, 0) AS REAL) AS price
        FROM products, activity
        WHERE {}
        "#,
        conditions.join(" AND ")
    );

    let mut query = sqlx::query_as::<_, ActivityRow>(&query_sql);
    if let Some(direction) = direction {
        query = query.bind(direction.code());
    }
    if let Some(party) = party {
        query = query.bind(party);
    }

    let rows = query.fetch_all(db).await?;
    tracing::debug!(
        party = party.unwrap_or("*"),
        direction = ?direction,
        rows = rows.len(),
        "Fetched activity"
    );
    Ok(rows)
}

/// Number of units moved per product.
pub async fn units_by_product(
    db: &Database,
    party: Option<&str>,
    direction: Direction,
) -> Result<UnitsByProduct, sqlx::Error> {
    let rows = query_activity(db, party, Some(direction)).await?;
    Ok(count_units(&rows))
}

/// Money moved per product.
pub async fn values_by_product(
    db: &Database,
    party: Option<&str>,
    direction: Direction,
) -> Result<ValuesByProduct, sqlx::Error> {
    let rows = query_activity(db, party, Some(direction)).await?;
    Ok(sum_values(&rows))
}

pub fn count_units(rows: &[ActivityRow]) -> UnitsByProduct {
    rows.iter().fold(UnitsByProduct::new(), |mut acc, row| {
        *acc.entry(row.product.clone()).or_insert(0) += 1;
        acc
    })
}

pub fn sum_values(rows: &[ActivityRow]) -> ValuesByProduct {
    rows.iter().fold(ValuesByProduct::new(), |mut acc, row| {
        *acc.entry(row.product.clone()).or_insert(Decimal::ZERO) += price_to_decimal(row.price);
        acc
    })
}

pub fn total_value(values: &ValuesByProduct) -> Decimal {
    values.values().copied().sum()
}

// Non-finite prices contribute nothing.
fn price_to_decimal(price: f64) -> Decimal {
    Decimal::from_f64(price).unwrap_or(Decimal::ZERO)
}
