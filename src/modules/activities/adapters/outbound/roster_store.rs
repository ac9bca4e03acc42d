// Port for the roster state.
//
// Reads never fail: absence is None/false. `decide_and_apply` is the only
// write path. It runs the decision and applies the accepted events as one
// step, so writers to the same activity are serialized.

use crate::modules::activities::core::activity::{Activity, Roster};
use crate::modules::activities::core::decision::Decision;
use async_trait::async_trait;

/// Decision over the current state of one activity.
pub type Decide = Box<dyn FnOnce(&Activity) -> Decision + Send>;

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn get_all(&self) -> Roster;
    async fn get(&self, name: &str) -> Option<Activity>;
    async fn contains(&self, name: &str) -> bool;

    /// Returns `None` when no activity is named `name`; `decide` is not called then.
    async fn decide_and_apply(&self, name: &str, decide: Decide) -> Option<Decision>;
}
