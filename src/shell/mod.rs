// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the roster store and wire it into the use case handlers.
// - Mount the REST routes, the GraphQL endpoint and the static landing page.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
