pub mod buy_item;
pub mod create;
pub mod get_item_count;
pub mod get_price;
pub mod list_item;

pub use buy_item::*;
pub use create::*;
pub use get_item_count::*;
pub use get_price::*;
pub use list_item::*;
