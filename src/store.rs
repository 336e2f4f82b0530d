//! Consumed interfaces the host application supplies.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{ProfileAggregate, UserId};

/// Read access to assembled profile aggregates.
///
/// `profile` must return a consistent snapshot of all seven sections,
/// never a partially updated view. Atomicity relative to section writes is
/// the implementor's obligation; the engine only reads.
pub trait ProfileStore: Send + Sync {
    fn profile(&self, user: UserId) -> Option<ProfileAggregate>;
}

/// HashMap-backed store used in tests and single-process deployments.
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<UserId, ProfileAggregate>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: ProfileAggregate) {
        self.profiles
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(profile.user_id, profile);
    }
}

impl ProfileStore for MemoryProfileStore {
    fn profile(&self, user: UserId) -> Option<ProfileAggregate> {
        self.profiles
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&user)
            .cloned()
    }
}
