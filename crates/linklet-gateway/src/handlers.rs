mod health;
mod link;

pub use health::health_handler;
pub use link::{create_link_handler, delete_link_handler, redirect_handler, stats_handler};
