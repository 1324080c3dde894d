use crate::{
    database::Database,
    models::{Identity, Party},
};

/// Works out who `identifier` belongs to.
///
/// The admin token wins outright. Otherwise customers are checked before suppliers,
/// and an identifier found in neither table is `Identity::Unknown`. No password is
/// involved: identification is by identifier alone.
pub async fn classify(db: &Database, identifier: &str, admin_token: &str) -> Result<Identity, sqlx::Error> {
    if identifier == admin_token {
        return Ok(Identity::Admin);
    }

    if let Some(customer) = find_party(db, PartyTable::Customers, identifier).await? {
        return Ok(Identity::Customer(customer));
    }

    if let Some(supplier) = find_party(db, PartyTable::Suppliers, identifier).await? {
        return Ok(Identity::Supplier(supplier));
    }

    Ok(Identity::Unknown)
}

#[derive(Debug, Clone, Copy)]
enum PartyTable {
    Customers,
    Suppliers,
}

async fn find_party(db: &Database, table: PartyTable, identifier: &str) -> Result<Option<Party>, sqlx::Error> {
    // Table names cannot be bound, so each lookup is a fixed statement.
    let sql = match table {
        PartyTable::Customers => {
            r#"
            SELECT CAST(id AS TEXT) AS id, name,
                   COALESCE(street, '') AS street,
                   COALESCE(city, '') AS city,
                   COALESCE(state, '') AS state
            FROM customers
            WHERE id = ?
            "#
        }
        PartyTable::Suppliers => {
            r#"
            SELECT CAST(id AS TEXT) AS id, name,
                   COALESCE(street, '') AS street,
                   COALESCE(city, '') AS city,
                   COALESCE(state, '') AS state
            FROM suppliers
            WHERE id = ?
            "#
        }
    };

    let party = sqlx::query_as::<_, Party>(sql)
        .bind(identifier)
        .fetch_optional(db)
        .await?;

    // `id = ?` can match across SQLite type affinity; require the exact text back.
    Ok(party.filter(|p| p.id == identifier))
}
