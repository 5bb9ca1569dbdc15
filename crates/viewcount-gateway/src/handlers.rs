mod health;
mod views;

pub use health::health_handler;
pub use views::views_handler;
