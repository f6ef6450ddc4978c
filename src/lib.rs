pub mod aggregate;
pub mod app;
pub mod config;
pub mod cycler;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod numeric;
pub mod ranking;
pub mod source;
pub mod state;
pub mod summary;
pub mod table;
pub mod ui;

pub use aggregate::{ParsePolicy, SalesColumns, aggregate, aggregate_with};
pub use app::router;
pub use config::Config;
pub use source::TableSource;
pub use state::AppState;
pub use table::Table;
