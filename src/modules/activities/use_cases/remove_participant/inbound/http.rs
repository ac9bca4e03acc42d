use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::activities::adapters::inbound::http_responses::MessageBody;
use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((activity_name, email)): Path<(String, String)>,
) -> impl IntoResponse {
    let command = RemoveParticipant {
        activity_name,
        email,
    };

    match state.remove_handler.handle(command).await {
        Ok(message) => Json(MessageBody { message }).into_response(),
        Err(error) => error.into_response(),
    }
}
