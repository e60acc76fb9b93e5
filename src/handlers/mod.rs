pub mod health;
pub mod list;
pub mod create;
pub mod pay;

pub use health::health_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use pay::pay_handler;
