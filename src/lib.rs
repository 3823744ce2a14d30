pub mod app;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::AppConfig;
pub use models::{Entry, LogStore, Subject};
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
