pub mod activity;
pub mod classifier;
pub mod inventory;
pub mod period;

pub use activity::{total_value, units_by_product, values_by_product, UnitsByProduct, ValuesByProduct};
pub use classifier::classify;
pub use inventory::{balance, net_movement, product_catalog, InventoryReport, StockAlert};
pub use period::reporting_period;
