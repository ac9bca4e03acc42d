use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::activity::{Activity, Roster};
use std::sync::Arc;

pub struct ListActivitiesHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListActivitiesHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Roster {
        self.store.get_all().await
    }

    pub async fn find(&self, name: &str) -> Option<Activity> {
        self.store.get(name).await
    }
}
