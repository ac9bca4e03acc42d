// In memory implementation of the RosterStore port.
//
// Purpose
// - Hold the roster for the lifetime of the process.
//
// Responsibilities
// - Keep activities in catalog order.
// - Decide and evolve under a single write guard, so a decision always sees
//   every write that completed before it.

use crate::modules::activities::adapters::outbound::roster_store::{Decide, RosterStore};
use crate::modules::activities::core::activity::{Activity, Roster};
use crate::modules::activities::core::catalog::seed_roster;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRosterStore {
    inner: RwLock<Roster>,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            inner: RwLock::new(roster),
        }
    }

    pub fn seeded() -> Self {
        Self::with_roster(seed_roster())
    }
}

#[async_trait::async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn get_all(&self) -> Roster {
        self.inner.read().await.clone()
    }

    async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    async fn contains(&self, name: &str) -> bool {
        self.inner.read().await.contains_key(name)
    }

    async fn decide_and_apply(&self, name: &str, decide: Decide) -> Option<Decision> {
        let mut guard = self.inner.write().await;
        let activity = guard.get_mut(name)?;

        let decision = decide(activity);
        if let Decision::Accepted { events } = &decision {
            *activity = events.iter().fold(activity.clone(), evolve);
        }
        Some(decision)
    }
}
