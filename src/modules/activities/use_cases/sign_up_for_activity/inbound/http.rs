use axum::{
    Form, Json,
    extract::{Path, Query, State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{MessageBody, detail};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EmailParams {
    pub email: Option<String>,
}

// `email` is read from the query string first, then from an urlencoded form body.
pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailParams>,
    form: Result<Form<EmailParams>, FormRejection>,
) -> impl IntoResponse {
    let email = query
        .email
        .or_else(|| form.ok().and_then(|Form(body)| body.email));
    let Some(email) = email else {
        return detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Missing required parameter: email",
        );
    };

    let command = SignUpForActivity {
        activity_name,
        email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageBody { message }).into_response(),
        Err(error) => error.into_response(),
    }
}
