use askama::Template;
use axum::response::Html;
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
    chart::BarChart,
    error::AppResult,
    filters,
    models::{Direction, Party, Period},
    services::{self, StockAlert},
    AppState,
};

const ADMIN_SALES_CHART: &str = "graph-admin-sales.svg";
const ADMIN_UNITS_CHART: &str = "graph-admin-units-sold.svg";
const ADMIN_INVENTORY_CHART: &str = "graph-admin-inventory.svg";
const SUPPLIER_CHART: &str = "graph-supplier.svg";
const CUSTOMER_CHART: &str = "graph-customer.svg";

// Template-friendly reporting period
struct PeriodDisplay {
    initial: String,
    last: String,
}

impl From<Period> for PeriodDisplay {
    fn from(period: Period) -> Self {
        Self {
            initial: period.initial.unwrap_or_else(|| "-".to_string()),
            last: period.last.unwrap_or_else(|| "-".to_string()),
        }
    }
}

struct ProductLine {
    name: String,
    units: i64,
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    period: PeriodDisplay,
    total_sales: Decimal,
    alerts: Vec<StockAlert>,
    sales_chart: String,
    units_chart: String,
    inventory_chart: String,
}

#[derive(Template)]
#[template(path = "supplier.html")]
struct SupplierTemplate {
    party: Party,
    period: PeriodDisplay,
    supplies: Vec<ProductLine>,
    chart: String,
}

#[derive(Template)]
#[template(path = "customer.html")]
struct CustomerTemplate {
    party: Party,
    period: PeriodDisplay,
    purchases: Vec<ProductLine>,
    chart: String,
}

fn chart_url(file_name: &str) -> String {
    format!("/static/img/{}", file_name)
}

/// Sales figures, units sold, period movement and stock alerts across all parties.
pub async fn admin_page(state: &AppState) -> AppResult<Html<String>> {
    let db = &state.db;
    let chart_dir = state.config.reporting.chart_dir();

    let sales = services::values_by_product(db, None, Direction::Outbound).await?;
    BarChart::new("Sales per product", "Sales", "Product")
        .with_bars(sales.iter().map(|(name, value)| (name.as_str(), value.to_f64().unwrap_or(0.0))))
        .save(&chart_dir, ADMIN_SALES_CHART)
        .await?;
    let total_sales = services::total_value(&sales);

    let sold = services::units_by_product(db, None, Direction::Outbound).await?;
    BarChart::new("Units sold", "Units", "Product")
        .with_bars(sold.iter().map(|(name, units)| (name.as_str(), *units as f64)))
        .save(&chart_dir, ADMIN_UNITS_CHART)
        .await?;

    let received = services::units_by_product(db, None, Direction::Inbound).await?;
    let movement = services::net_movement(&sold, &received);
    BarChart::new("Product balance", "Inputs minus outputs", "Product")
        .with_bars(movement.iter().map(|(name, units)| (name.as_str(), *units as f64)))
        .save(&chart_dir, ADMIN_INVENTORY_CHART)
        .await?;

    let catalog = services::product_catalog(db).await?;
    let report = services::balance(&sold, &received, &catalog);
    if !report.alerts.is_empty() {
        tracing::warn!(count = report.alerts.len(), "Products below minimum stock");
    }

    let period = services::reporting_period(db).await?;

    let template = AdminTemplate {
        period: period.into(),
        total_sales,
        alerts: report.alerts,
        sales_chart: chart_url(ADMIN_SALES_CHART),
        units_chart: chart_url(ADMIN_UNITS_CHART),
        inventory_chart: chart_url(ADMIN_INVENTORY_CHART),
    };

    Ok(Html(template.render()?))
}

/// Units supplied by one supplier.
pub async fn supplier_page(state: &AppState, party: Party) -> AppResult<Html<String>> {
    let db = &state.db;

    let supplies = services::units_by_product(db, Some(&party.id), Direction::Inbound).await?;
    BarChart::new("Supplies per product", "Supply", "Product")
        .with_bars(supplies.iter().map(|(name, units)| (name.as_str(), *units as f64)))
        .save(&state.config.reporting.chart_dir(), SUPPLIER_CHART)
        .await?;

    let period = services::reporting_period(db).await?;

    let template = SupplierTemplate {
        party,
        period: period.into(),
        supplies: supplies
            .into_iter()
            .map(|(name, units)| ProductLine { name, units })
            .collect(),
        chart: chart_url(SUPPLIER_CHART),
    };

    Ok(Html(template.render()?))
}

/// Units bought by one customer.
pub async fn customer_page(state: &AppState, party: Party) -> AppResult<Html<String>> {
    let db = &state.db;

    let purchases = services::units_by_product(db, Some(&party.id), Direction::Outbound).await?;
    BarChart::new("Sales per product", "Sales", "Product")
        .with_bars(purchases.iter().map(|(name, units)| (name.as_str(), *units as f64)))
        .save(&state.config.reporting.chart_dir(), CUSTOMER_CHART)
        .await?;

    let period = services::reporting_period(db).await?;

    let template = CustomerTemplate {
        party,
        period: period.into(),
        purchases: purchases
            .into_iter()
            .map(|(name, units)| ProductLine { name, units })
            .collect(),
        chart: chart_url(CUSTOMER_CHART),
    };

    Ok(Html(template.render()?))
}
