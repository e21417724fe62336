pub mod app;
pub mod auth;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod rewards;
pub mod state;
pub mod stats;
pub mod storage;
pub mod timer;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::FileStore;
