//! Live ISS position tracker.
//!
//! Polls the open-notify API for the International Space Station's
//! current latitude/longitude on a fixed interval and serves a web
//! dashboard with an interactive map marker at the latest position.
//! Each refresh cycle builds a fresh map view, so a failed fetch simply
//! yields a markerless map until the next tick.

pub mod api;
pub mod config;
pub mod http_server;
pub mod map;
pub mod position;
pub mod tracker;

pub use api::{ApiError, IssClient, PositionSource, DEFAULT_API_URL};
pub use config::{ConfigError, TrackerConfig};
pub use map::{MapView, Marker};
pub use position::Position;
pub use tracker::{run_cycle, run_tracker, SharedState, TrackerState};
