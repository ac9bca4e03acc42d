use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::remove_participant::handler::RemoveParticipantHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListActivitiesHandler<InMemoryRosterStore>>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryRosterStore>>,
    pub remove_handler: Arc<RemoveParticipantHandler<InMemoryRosterStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryRosterStore>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(store.clone())),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(store.clone())),
            remove_handler: Arc::new(RemoveParticipantHandler::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryRosterStore::seeded()))
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(InMemoryRosterStore::new()))
    }
}
