// src/pipeline/refresh.rs

//! Single-flight refresh of a status screen.
//!
//! A `StatusFeed` owns the fetch side of one screen. At most one fetch is
//! outstanding at a time; a refresh requested while another is pending is
//! skipped instead of queued. The feed only holds a `Weak` handle to the
//! screen, so a screen torn down mid-fetch simply never sees the result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{DisplayRow, RowAssembly};
use crate::services::{LocationRegistry, StatusSource, build_rows};

/// What the screen should currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    /// Fetch pending, show a spinner
    Loading,
    /// Rows from the latest successful fetch
    Ready {
        fetched_at: DateTime<Utc>,
        assembly: RowAssembly,
    },
    /// The latest fetch failed; nothing to show
    Failed { message: String },
}

/// Presentation-owned state of the location list.
#[derive(Debug)]
pub struct StatusScreen {
    state: Mutex<ScreenState>,
}

impl StatusScreen {
    /// Create a screen in the loading state.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ScreenState::Loading),
        })
    }

    pub fn state(&self) -> ScreenState {
        self.lock().clone()
    }

    /// Rows currently displayed; empty unless the last fetch succeeded.
    pub fn rows(&self) -> Vec<DisplayRow> {
        match &*self.lock() {
            ScreenState::Ready { assembly, .. } => assembly.rows.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.lock(), ScreenState::Loading)
    }

    fn set(&self, state: ScreenState) {
        *self.lock() = state;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Result of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Rows were published to the screen
    Applied { rows: usize, dropped: usize },
    /// Another fetch was still pending; no request was issued
    AlreadyPending,
    /// The screen was gone by the time the result arrived
    Discarded,
}

/// Fetches status and publishes rows to one screen.
pub struct StatusFeed {
    source: Box<dyn StatusSource>,
    registry: Arc<LocationRegistry>,
    in_flight: AtomicBool,
}

impl StatusFeed {
    pub fn new(source: Box<dyn StatusSource>, registry: Arc<LocationRegistry>) -> Self {
        Self {
            source,
            registry,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch once and publish the result to `screen`.
    ///
    /// Fetch failures put the screen in `ScreenState::Failed` and are
    /// returned; they are never retried here.
    pub async fn refresh(&self, screen: &Weak<StatusScreen>) -> Result<RefreshOutcome> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            log::debug!("Refresh skipped: a fetch is already pending");
            return Ok(RefreshOutcome::AlreadyPending);
        };

        match screen.upgrade() {
            Some(screen) => screen.set(ScreenState::Loading),
            None => return Ok(RefreshOutcome::Discarded),
        }

        let result = self.source.fetch().await;

        let Some(screen) = screen.upgrade() else {
            log::debug!("Screen closed while fetching; discarding result");
            return Ok(RefreshOutcome::Discarded);
        };

        match result {
            Ok(snapshot) => {
                let assembly = build_rows(&self.registry, &snapshot.records);
                let outcome = RefreshOutcome::Applied {
                    rows: assembly.rows.len(),
                    dropped: assembly.failures.len(),
                };
                screen.set(ScreenState::Ready {
                    fetched_at: snapshot.fetched_at,
                    assembly,
                });
                Ok(outcome)
            }
            Err(error) => {
                log::error!("Status fetch failed: {}", error);
                screen.set(ScreenState::Failed {
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }
}

/// Holds the in-flight flag for the duration of one fetch.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
