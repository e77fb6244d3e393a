pub mod item;
pub mod marketplace;

pub use item::*;
pub use marketplace::*;
