use crate::modules::activities::adapters::outbound::roster_store::RosterStore;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message on success.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, RosterError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let decision = self
            .store
            .decide_and_apply(
                &activity_name,
                Box::new(move |activity: &Activity| decide_sign_up(activity, command)),
            )
            .await;

        match decision {
            Some(Decision::Accepted { .. }) => {
                tracing::info!(activity = %activity_name, %email, "participant signed up");
                Ok(format!("Signed up {email} for {activity_name}"))
            }
            Some(Decision::Rejected { reason }) => {
                tracing::debug!(activity = %activity_name, %email, %reason, "signup rejected");
                Err(reason)
            }
            None => {
                tracing::debug!(activity = %activity_name, "signup for unknown activity");
                Err(RosterError::ActivityNotFound)
            }
        }
    }
}
