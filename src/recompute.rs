//! Section-change driven score recomputation.
//!
//! Section writes never block on scoring: the writing side publishes a
//! `SectionChanged` event and moves on. A single consumer task drains the
//! channel, reads a fresh aggregate snapshot per event, recomputes
//! completeness and strength wholesale, and hands both to the sink.
//! Processing order within the channel gives last-write-wins on the
//! persisted result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::completeness::{CompletenessCalculator, CompletenessResult};
use crate::store::ProfileStore;
use crate::strength::{compute_strength_metrics, StrengthMetrics};
use crate::{run_id, ProfileSection, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionChanged {
    pub user_id: UserId,
    pub section: ProfileSection,
    pub changed_at: DateTime<Utc>,
}

impl SectionChanged {
    pub fn now(user_id: UserId, section: ProfileSection) -> Self {
        Self {
            user_id,
            section,
            changed_at: Utc::now(),
        }
    }
}

/// Persistence callback for recomputed scores, supplied by the host.
pub trait ScoreSink: Send + Sync {
    fn persist(
        &self,
        user_id: UserId,
        completeness: &CompletenessResult,
        strength: &StrengthMetrics,
    );
}

/// Consumer loop. Runs until the sending side closes the channel.
pub async fn run_recompute_worker(
    mut events: mpsc::Receiver<SectionChanged>,
    store: Arc<dyn ProfileStore>,
    sink: Arc<dyn ScoreSink>,
    calculator: CompletenessCalculator,
) {
    info!(run_id = run_id::get(), "recompute worker started");

    while let Some(event) = events.recv().await {
        let Some(profile) = store.profile(event.user_id) else {
            debug!(
                user_id = event.user_id,
                section = event.section.as_str(),
                "no profile snapshot for changed section, skipping"
            );
            continue;
        };

        let completeness = calculator.compute(&profile);
        let strength = compute_strength_metrics(&profile);
        sink.persist(event.user_id, &completeness, &strength);

        debug!(
            user_id = event.user_id,
            section = event.section.as_str(),
            completeness_score = completeness.completeness_score,
            "scores recomputed"
        );
    }

    info!("recompute worker stopped");
}
