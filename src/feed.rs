//! Fetch → sort refresh cycle and the fixed-period polling loop around it.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, instrument, warn};

use crate::client::CricClient;
use crate::error::Result;
use crate::model::MatchList;
use crate::sort::sort_matches;

/// How often the feed re-fetches by default.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Shortest period [`LiveFeed::run`] will poll at; shorter periods are raised to it.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Anything that can deliver the current list of matches.
pub trait MatchSource {
    fn current_matches(&self) -> impl Future<Output = Result<MatchList>> + Send;
}

impl MatchSource for CricClient {
    fn current_matches(&self) -> impl Future<Output = Result<MatchList>> + Send {
        self.get_current_matches(0)
    }
}

/// The ordered match list from one successful refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub matches: MatchList,
    pub last_updated: DateTime<Utc>,
}

/// Polls a [`MatchSource`] and hands out sorted snapshots.
#[derive(Debug, Clone)]
pub struct LiveFeed<S> {
    source: S,
}

impl<S: MatchSource> LiveFeed<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch once and sort for display as of `now`.
    #[instrument(skip(self))]
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<Snapshot> {
        let fetched = self.source.current_matches().await?;
        let matches = sort_matches(&fetched, now);
        debug!(count = matches.len(), "refreshed matches");
        Ok(Snapshot {
            matches,
            last_updated: now,
        })
    }

    /// Refresh now and then every `period` until `on_update` breaks.
    ///
    /// Each fetch is awaited before the next tick is taken, so at most one
    /// request is outstanding. Ticks missed during a slow fetch are skipped
    /// rather than replayed. Failures are passed to `on_update` as well so the
    /// caller can offer a retry. A zero `period` is raised to
    /// [`MIN_REFRESH_INTERVAL`].
    pub async fn run<F>(&self, period: Duration, mut on_update: F)
    where
        F: FnMut(Result<Snapshot>) -> ControlFlow<()>,
    {
        if period < MIN_REFRESH_INTERVAL {
            warn!(?period, "refresh period too short, using minimum");
        }
        let mut ticker = interval(period.max(MIN_REFRESH_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let result = self.refresh(Utc::now()).await;
            if let Err(e) = &result {
                warn!(error = %e, retryable = e.is_retryable(), "refresh failed");
            }
            if on_update(result).is_break() {
                break;
            }
        }
    }
}
