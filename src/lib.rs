pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod request;
pub mod sign;
pub mod transport;

pub use client::TrackClient;
pub use config::Config;
pub use error::TrackError;
pub use models::{ShipmentState, TraceEvent, TrackResult};
