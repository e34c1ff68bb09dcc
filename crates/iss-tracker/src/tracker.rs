//! Refresh driver: one fetch-render cycle per timer tick.
//!
//! Each cycle is a pure function from a fetch outcome to a fresh
//! `MapView`; the only state that survives a cycle is the published
//! latest outcome, which the next cycle replaces wholesale. Ticks are
//! strictly sequential: a tick awaits its cycle before the next fires.

use crate::api::PositionSource;
use crate::map::MapView;
use crate::position::Position;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};

/// Latest published refresh outcome, shared with the HTTP surface.
#[derive(Debug, Clone)]
pub struct TrackerState {
    pub map: MapView,
    pub position: Option<Position>,
    /// Collapsed user-visible message for the last failed fetch, if any.
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cycles: u64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            map: MapView::default(),
            position: None,
            last_error: None,
            updated_at: None,
            cycles: 0,
        }
    }
}

pub type SharedState = Arc<RwLock<TrackerState>>;

/// Result of one fetch-render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub map: MapView,
    pub position: Option<Position>,
    pub error: Option<String>,
}

/// Run one fetch-render cycle.
///
/// Any fetch failure collapses into a single message and a sentinel-absent
/// position; the cycle itself never fails.
pub async fn run_cycle<S: PositionSource>(source: &S) -> CycleOutcome {
    let (position, error) = match source.fetch_position().await {
        Ok(position) => (Some(position), None),
        Err(e) => {
            log::error!("[Tracker] error fetching data: {}", e);
            (None, Some(format!("Error fetching data: {}", e)))
        }
    };

    CycleOutcome {
        map: MapView::render(position),
        position,
        error,
    }
}

/// Run the refresh loop until the shutdown signal fires.
///
/// The first tick fires immediately and seeds the initial map; subsequent
/// ticks fire once per interval.
pub async fn run_tracker<S: PositionSource>(
    source: S,
    state: SharedState,
    interval_ms: u64,
    mut shutdown: watch::Receiver<()>,
) {
    log::info!("[Tracker] starting refresh loop ({} ms interval)", interval_ms);

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let outcome = run_cycle(&source).await;
                let mut s = state.write().await;
                s.cycles += 1;
                s.map = outcome.map;
                s.position = outcome.position;
                s.last_error = outcome.error;
                s.updated_at = Some(Utc::now());
            }
            _ = shutdown.changed() => {
                log::info!("[Tracker] shutdown signal received, exiting");
                break;
            }
        }
    }
}
