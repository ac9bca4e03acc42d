use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::remove_participant::inbound::http as remove_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/participants/{email}",
            delete(remove_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(schema))
        .with_state(state)
}
