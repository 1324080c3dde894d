//! Demo data for local runs and tests.
//!
//! Figures for the full data set:
//! - sales: Widget 37.50 (3 units), Gadget 60.00 (2 units); total 97.50
//! - received: one unit each of Widget, Gadget and Sprocket
//! - balances: Widget 8, Gadget 1 (below its minimum of 4), Sprocket 21
//! - period: 2024-01-02 to 2024-03-15

use crate::database::Database;

/// (id, name, initial stock, minimum stock, location)
pub const PRODUCTS: &[(i64, &str, i64, i64, &str)] = &[
    (1, "Widget", 10, 5, "Aisle 1"),
    (2, "Gadget", 2, 4, "Aisle 2"),
    (3, "Sprocket", 20, 3, "Back room"),
];

/// (id, name, street, city, state)
pub const CUSTOMERS: &[(&str, &str, &str, &str, &str)] = &[
    ("C001", "Ada Retail", "12 High Street", "Leeds", "West Yorkshire"),
    ("C002", "Bolt Stores", "4 Mill Lane", "York", "North Yorkshire"),
];

pub const SUPPLIERS: &[(&str, &str, &str, &str, &str)] = &[
    ("P001", "Parts Inc", "88 Foundry Road", "Sheffield", "South Yorkshire"),
    ("P002", "Gearworks", "3 Canal Wharf", "Hull", "East Yorkshire"),
];

/// (product id, party id, direction code, price, date)
pub const ACTIVITY: &[(i64, &str, &str, f64, &str)] = &[
    (1, "C001", "V", 12.5, "2024-01-05"),
    (1, "C001", "V", 12.5, "2024-01-09"),
    (1, "C002", "V", 12.5, "2024-02-01"),
    (1, "P001", "C", 8.0, "2024-01-02"),
    (2, "C002", "V", 30.0, "2024-01-20"),
    (2, "C002", "V", 30.0, "2024-03-15"),
    (2, "P002", "C", 20.0, "2024-01-03"),
    (3, "P001", "C", 4.25, "2024-02-10"),
];

/// Inserts the demo catalog, parties and activity in one transaction.
pub async fn insert_demo_data(db: &Database) -> Result<(), sqlx::Error> {
    let mut tx = db.begin().await?;

    for (id, name, initial, minimum, location) in PRODUCTS {
        sqlx::query(
            "INSERT INTO products (id, name, initialstock, minimumstock, location) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*id)
        .bind(*name)
        .bind(*initial)
        .bind(*minimum)
        .bind(*location)
        .execute(&mut *tx)
        .await?;
    }

    for (id, name, street, city, state) in CUSTOMERS {
        sqlx::query("INSERT INTO customers (id, name, street, city, state) VALUES (?, ?, ?, ?, ?)")
            .bind(*id)
            .bind(*name)
            .bind(*street)
            .bind(*city)
            .bind(*state)
            .execute(&mut *tx)
            .await?;
    }

    for (id, name, street, city, state) in SUPPLIERS {
        sqlx::query("INSERT INTO suppliers (id, name, street, city, state) VALUES (?, ?, ?, ?, ?)")
            .bind(*id)
            .bind(*name)
            .bind(*street)
            .bind(*city)
            .bind(*state)
            .execute(&mut *tx)
            .await?;
    }

    for (product, party, direction, price, date) in ACTIVITY {
        sqlx::query(
            "INSERT INTO activity (idproduct, idsuppocust, inout, price, date) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*product)
        .bind(*party)
        .bind(*direction)
        .bind(*price)
        .bind(*date)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
