use crate::{database::Database, models::Period};

/// Earliest and latest activity dates. Both are `None` when there is no activity.
pub async fn reporting_period(db: &Database) -> Result<Period, sqlx::Error> {
    sqlx::query_as::<_, Period>(
        r#"
        SELECT CAST(MIN(date) AS TEXT) AS "initial",
               CAST(MAX(date) AS TEXT) AS "last"
        FROM activity
        "#,
    )
    .fetch_one(db)
    .await
}
