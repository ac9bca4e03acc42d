use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveParticipantMutation;

#[Object]
impl RemoveParticipantMutation {
    async fn remove_participant(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let message = state
            .remove_handler
            .handle(RemoveParticipant {
                activity_name,
                email,
            })
            .await?;
        Ok(message)
    }
}
