pub mod app;
pub mod challenges;
pub mod coach;
pub mod config;
pub mod dashboard;
pub mod emissions;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod learn;
pub mod models;
pub mod notifications;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_store;
