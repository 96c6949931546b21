pub mod app;
pub mod contributions;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod resolve;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;
pub mod views;

pub use app::router;
pub use state::AppState;
pub use store::{load_data, resolve_data_path};
