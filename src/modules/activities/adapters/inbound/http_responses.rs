use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::errors::RosterError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailBody {
    pub detail: String,
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(DetailBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
            RosterError::ParticipantNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        detail(self.status_code(), self.to_string())
    }
}
