mod product;
mod stock_group;

pub use product::*;
pub use stock_group::StockGroup;
