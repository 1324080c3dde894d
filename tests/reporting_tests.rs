//! Aggregation, inventory balance and period lookups.
//!
//! Database-backed tests run against the demo data set; the laws are checked
//! with proptest over the pure folds.

mod common;

use std::collections::BTreeSet;
use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crm_lite::{
    models::{ActivityRow, Direction, Period, Product},
    services::{
        self,
        activity::{count_units, query_activity, sum_values},
        UnitsByProduct,
    },
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Database-backed tests
// ============================================================================

#[tokio::test]
async fn query_activity_filters_by_direction_and_party() {
    let db = common::seeded_db().await;

    let all = query_activity(&db, None, None).await.unwrap();
    assert_eq!(all.len(), 8);

    let sales = query_activity(&db, None, Some(Direction::Outbound)).await.unwrap();
    assert_eq!(sales.len(), 5);

    let empty_party_means_everyone = query_activity(&db, Some(""), Some(Direction::Inbound)).await.unwrap();
    assert_eq!(empty_party_means_everyone.len(), 3);

    let ada = query_activity(&db, Some("C001"), Some(Direction::Outbound)).await.unwrap();
    assert_eq!(ada.len(), 2);
    assert!(ada.iter().all(|row| row.product == "Widget"));
}

#[tokio::test]
async fn units_sold_per_product() {
    let db = common::seeded_db().await;

    let sold = services::units_by_product(&db, None, Direction::Outbound).await.unwrap();

    assert_eq!(sold.get("Widget"), Some(&3));
    assert_eq!(sold.get("Gadget"), Some(&2));
    // No sales at all: absent rather than zero.
    assert!(!sold.contains_key("Sprocket"));
}

#[tokio::test]
async fn units_scoped_to_one_party() {
    let db = common::seeded_db().await;

    let supplied = services::units_by_product(&db, Some("P001"), Direction::Inbound).await.unwrap();
    assert_eq!(supplied.len(), 2);
    assert_eq!(supplied.get("Widget"), Some(&1));
    assert_eq!(supplied.get("Sprocket"), Some(&1));

    let bought = services::units_by_product(&db, Some("C002"), Direction::Outbound).await.unwrap();
    assert_eq!(bought.get("Widget"), Some(&1));
    assert_eq!(bought.get("Gadget"), Some(&2));

    let nobody = services::units_by_product(&db, Some("X999"), Direction::Outbound).await.unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn sales_values_and_total() {
    let db = common::seeded_db().await;

    let sales = services::values_by_product(&db, None, Direction::Outbound).await.unwrap();

    assert_eq!(sales.get("Widget"), Some(&dec("37.50")));
    assert_eq!(sales.get("Gadget"), Some(&dec("60.00")));
    assert_eq!(services::total_value(&sales), dec("97.50"));
}

#[tokio::test]
async fn inventory_balance_from_database() {
    let db = common::seeded_db().await;

    let sold = services::units_by_product(&db, None, Direction::Outbound).await.unwrap();
    let received = services::units_by_product(&db, None, Direction::Inbound).await.unwrap();
    let catalog = services::product_catalog(&db).await.unwrap();
    let report = services::balance(&sold, &received, &catalog);

    assert_eq!(report.balances.get("Widget"), Some(&8));
    assert_eq!(report.balances.get("Gadget"), Some(&1));
    assert_eq!(report.balances.get("Sprocket"), Some(&21));

    assert_eq!(report.alerts.len(), 1);
    let alert = &report.alerts[0];
    assert_eq!(alert.name, "Gadget");
    assert_eq!(alert.location, "Aisle 2");
    assert_eq!(alert.threshold, 4);
    assert_eq!(alert.balance, 1);
}

#[tokio::test]
async fn catalog_is_read_in_id_order() {
    let db = common::seeded_db().await;

    let names: Vec<String> = services::product_catalog(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Widget", "Gadget", "Sprocket"]);
}

#[tokio::test]
async fn period_spans_first_and_last_activity() {
    let db = common::seeded_db().await;

    let period = services::reporting_period(&db).await.unwrap();

    assert_eq!(period.initial.as_deref(), Some("2024-01-02"));
    assert_eq!(period.last.as_deref(), Some("2024-03-15"));
}

#[tokio::test]
async fn period_is_empty_without_activity() {
    let db = common::empty_db().await;

    let period = services::reporting_period(&db).await.unwrap();

    assert_eq!(period, Period::default());
}

// ============================================================================
// Property-based tests
// ============================================================================

const NAMES: [&str; 5] = ["Widget", "Gadget", "Sprocket", "Bolt", "Nut"];

fn row_strategy() -> impl Strategy<Value = ActivityRow> {
    (0..NAMES.len(), 0u32..100_000).prop_map(|(i, cents)| ActivityRow {
        product: NAMES[i].to_string(),
        price: f64::from(cents) / 100.0,
    })
}

fn units_strategy() -> impl Strategy<Value = UnitsByProduct> {
    prop::collection::btree_map(
        (0..NAMES.len()).prop_map(|i| NAMES[i].to_string()),
        1i64..50,
        0..NAMES.len(),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0i64..40, 0i64..40), NAMES.len()).prop_map(|stocks| {
        NAMES
            .iter()
            .zip(stocks)
            .map(|(name, (initial_stock, minimum_stock))| Product {
                name: name.to_string(),
                initial_stock,
                minimum_stock,
                location: format!("Shelf {}", name),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shuffling the rows never changes either aggregate.
    #[test]
    fn prop_aggregation_is_order_independent(
        (rows, shuffled) in prop::collection::vec(row_strategy(), 0..40)
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        prop_assert_eq!(count_units(&rows), count_units(&shuffled));
        prop_assert_eq!(sum_values(&rows), sum_values(&shuffled));
    }

    /// Counts add up to the number of rows, and only products with rows appear.
    #[test]
    fn prop_counts_cover_every_row(rows in prop::collection::vec(row_strategy(), 0..40)) {
        let units = count_units(&rows);
        prop_assert_eq!(units.values().sum::<i64>(), rows.len() as i64);

        let seen: BTreeSet<&str> = rows.iter().map(|r| r.product.as_str()).collect();
        let keys: BTreeSet<&str> = units.keys().map(String::as_str).collect();
        prop_assert_eq!(seen, keys);
    }

    /// balance == initial + inbound - outbound, absent entries counting as zero.
    #[test]
    fn prop_balance_law(
        outbound in units_strategy(),
        inbound in units_strategy(),
        catalog in catalog_strategy(),
    ) {
        let report = services::balance(&outbound, &inbound, &catalog);

        for product in &catalog {
            let expected = product.initial_stock
                + inbound.get(&product.name).copied().unwrap_or(0)
                - outbound.get(&product.name).copied().unwrap_or(0);
            prop_assert_eq!(report.balances.get(&product.name).copied(), Some(expected));
        }
    }

    /// A product is flagged exactly when its balance is below its minimum.
    #[test]
    fn prop_alert_law(
        outbound in units_strategy(),
        inbound in units_strategy(),
        catalog in catalog_strategy(),
    ) {
        let report = services::balance(&outbound, &inbound, &catalog);

        for product in &catalog {
            let balance = report.balances[&product.name];
            let flagged = report.alerts.iter().find(|a| a.name == product.name);
            if balance < product.minimum_stock {
                let alert = flagged.expect("product below minimum must be flagged");
                prop_assert_eq!(alert.balance, balance);
                prop_assert_eq!(alert.threshold, product.minimum_stock);
                prop_assert_eq!(&alert.location, &product.location);
            } else {
                prop_assert!(flagged.is_none());
            }
        }
    }
}
