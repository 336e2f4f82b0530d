//! Match ranking over a candidate pool, plus the id-resolving compatibility
//! check. Scoring calls are pure and mutually independent, so the ranking
//! pass fans them out across worker tasks bounded by a semaphore.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use tokio::{sync::Semaphore, time::Instant};
use tracing::{debug, info, warn};

use super::scoring::{CompatibilityBreakdown, CompatibilityScorer, ScoringConfig};
use crate::{run_id, store::ProfileStore, UserId};

/// Ranking surfaces only strong matches; this is deliberately stricter than
/// the 50-point "basically compatible" predicate.
const DEFAULT_MIN_MATCH_SCORE: u32 = 60;

const DEFAULT_SCORING_CONCURRENCY: usize = 16;

fn env_min_match_score() -> u32 {
    std::env::var("VH_MIN_MATCH_SCORE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MIN_MATCH_SCORE)
}

#[derive(Debug, Clone)]
pub struct RankerConfig {
    pub min_match_score: u32,
    pub scoring_concurrency: usize,
    pub scoring: ScoringConfig,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_match_score: env_min_match_score(),
            scoring_concurrency: DEFAULT_SCORING_CONCURRENCY,
            scoring: ScoringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub user_id: UserId,
    pub overall: u32,
}

#[derive(Debug, Error)]
pub enum RankError {
    #[error("seed profile not found: {0}")]
    SeedNotFound(UserId),
}

pub struct MatchRanker {
    store: Arc<dyn ProfileStore>,
    scorer: Arc<CompatibilityScorer>,
    min_match_score: u32,
    scoring_concurrency: usize,
}

impl MatchRanker {
    pub fn new(store: Arc<dyn ProfileStore>, config: RankerConfig) -> Self {
        Self {
            store,
            scorer: Arc::new(CompatibilityScorer::new(config.scoring)),
            min_match_score: config.min_match_score,
            scoring_concurrency: config.scoring_concurrency,
        }
    }

    /// Rank `pool` against the seed user: highest overall first, ties broken
    /// by pool iteration order, truncated to `limit`. The seed itself and
    /// candidates below the ranking threshold are excluded; a candidate whose
    /// profile cannot be loaded or scored is skipped, never fatal. When a
    /// deadline is given and expires mid-pass, whatever has been scored so
    /// far is ranked and returned.
    pub async fn rank_candidates(
        &self,
        seed: UserId,
        limit: usize,
        pool: &[UserId],
        deadline: Option<Instant>,
    ) -> Result<Vec<RankedCandidate>, RankError> {
        let run = run_id::generate();
        let seed_profile = Arc::new(
            self.store
                .profile(seed)
                .ok_or(RankError::SeedNotFound(seed))?,
        );
        info!(run_id = %run, seed, pool_size = pool.len(), "ranking pass started");

        let semaphore = Arc::new(Semaphore::new(self.scoring_concurrency));
        let mut handles = Vec::new();
        for &candidate in pool.iter().filter(|&&c| c != seed) {
            let store = Arc::clone(&self.store);
            let scorer = Arc::clone(&self.scorer);
            let seed_profile = Arc::clone(&seed_profile);
            let semaphore = Arc::clone(&semaphore);

            handles.push((
                candidate,
                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok()?;
                    let profile = store.profile(candidate)?;
                    let score = scorer.score(
                        &seed_profile,
                        &profile,
                        seed_profile.partner_preference.as_ref(),
                        profile.partner_preference.as_ref(),
                    );
                    Some(score.overall)
                }),
            ));
        }

        let mut scored: HashMap<UserId, u32> = HashMap::new();
        let mut pending = handles.into_iter();
        while let Some((candidate, handle)) = pending.next() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                warn!(
                    run_id = %run,
                    scored = scored.len(),
                    "deadline reached, ranking what was scored so far"
                );
                handle.abort();
                for (_, remaining) in pending.by_ref() {
                    remaining.abort();
                }
                break;
            }

            let joined = match deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, handle).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        warn!(
                            run_id = %run,
                            scored = scored.len(),
                            "deadline reached, ranking what was scored so far"
                        );
                        for (_, remaining) in pending.by_ref() {
                            remaining.abort();
                        }
                        break;
                    }
                },
                None => handle.await,
            };

            match joined {
                Ok(Some(overall)) => {
                    scored.insert(candidate, overall);
                }
                Ok(None) => {
                    debug!(run_id = %run, candidate, "candidate skipped: profile unavailable")
                }
                Err(err) => {
                    debug!(run_id = %run, candidate, error = %err, "candidate scoring failed, skipping")
                }
            }
        }

        let mut ranked: Vec<RankedCandidate> = pool
            .iter()
            .filter_map(|c| {
                scored.remove(c).map(|overall| RankedCandidate {
                    user_id: *c,
                    overall,
                })
            })
            .filter(|r| r.overall >= self.min_match_score)
            .collect();
        // Stable sort keeps pool iteration order between equal scores.
        ranked.sort_by(|x, y| y.overall.cmp(&x.overall));
        ranked.truncate(limit);

        info!(run_id = %run, returned = ranked.len(), "ranking pass finished");
        Ok(ranked)
    }
}

#[derive(Debug, Error)]
pub enum CompatibilityError {
    #[error("no profile found for either user: {a}, {b}")]
    NotFound { a: UserId, b: UserId },
}

/// Resolves two user ids through the store and scores them. One unresolvable
/// side degrades to the fixed fallback breakdown; both unresolvable is the
/// caller's error.
pub struct CompatibilityService {
    store: Arc<dyn ProfileStore>,
    scorer: CompatibilityScorer,
}

impl CompatibilityService {
    pub fn new(store: Arc<dyn ProfileStore>, config: ScoringConfig) -> Self {
        Self {
            store,
            scorer: CompatibilityScorer::new(config),
        }
    }

    pub fn check(&self, a: UserId, b: UserId) -> Result<CompatibilityBreakdown, CompatibilityError> {
        match (self.store.profile(a), self.store.profile(b)) {
            (Some(profile_a), Some(profile_b)) => Ok(self
                .scorer
                .score(
                    &profile_a,
                    &profile_b,
                    profile_a.partner_preference.as_ref(),
                    profile_b.partner_preference.as_ref(),
                )
                .breakdown()),
            (None, None) => Err(CompatibilityError::NotFound { a, b }),
            _ => {
                debug!(user_a = a, user_b = b, "one profile unresolvable, using fallback score");
                Ok(CompatibilityBreakdown::fallback())
            }
        }
    }
}
