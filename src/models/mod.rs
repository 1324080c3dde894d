pub mod activity;
pub mod party;
pub mod product;

pub use activity::{ActivityRow, Direction, Period};
pub use party::{Identity, Party, Role};
pub use product::Product;
