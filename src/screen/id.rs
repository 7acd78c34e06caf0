use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a node in the navigation tree.
///
/// Ids are only ever minted by an [`IdGenerator`] owned by the navigator,
/// so two nodes compare equal exactly when they are the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u128);

impl ScreenId {
    /// Raw 128-bit value of this id.
    pub fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= u64::MAX as u128 {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "{}", Uuid::from_u128(self.0))
        }
    }
}

/// How new [`ScreenId`]s are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Monotonic counter starting at 1. Deterministic, used by replays and tests.
    #[default]
    Sequential,
    /// Random UUID v4 tokens.
    Random,
}

/// Mints process-unique [`ScreenId`]s.
///
/// Confined to the navigator's write lock, so no synchronization of its own.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: u128,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, next: 1 }
    }

    pub fn sequential() -> Self {
        Self::new(IdStrategy::Sequential)
    }

    pub fn random() -> Self {
        Self::new(IdStrategy::Random)
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Mint the next id. Never returns an id twice.
    pub fn next_id(&mut self) -> ScreenId {
        match self.strategy {
            IdStrategy::Sequential => {
                let id = ScreenId(self.next);
                self.next += 1;
                id
            }
            IdStrategy::Random => ScreenId(Uuid::new_v4().as_u128()),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::sequential()
    }
}
