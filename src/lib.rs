pub use api::ApiResponse;
pub use client::FootballClient;
pub use config::ApiConfig;
pub use error::{FootballError, Result};
pub use model::*;
pub use table::{Cell, Record, Table};

mod api;
mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod table;
