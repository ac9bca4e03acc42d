use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::modules::activities::use_cases::remove_participant::decide::decide_remove;
use std::sync::Arc;

pub struct RemoveParticipantHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveParticipantHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RemoveParticipant) -> Result<String, RosterError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let decision = self
            .store
            .decide_and_apply(
                &activity_name,
                Box::new(move |activity: &Activity| decide_remove(activity, command)),
            )
            .await;

        match decision {
            Some(Decision::Accepted { .. }) => {
                tracing::info!(activity = %activity_name, %email, "participant removed");
                Ok(format!("Removed {email} from {activity_name}"))
            }
            Some(Decision::Rejected { reason }) => {
                tracing::debug!(activity = %activity_name, %email, %reason, "removal rejected");
                Err(reason)
            }
            None => {
                tracing::debug!(activity = %activity_name, "removal from unknown activity");
                Err(RosterError::ActivityNotFound)
            }
        }
    }
}
