// Composition root for the camps bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the camp store, optionally seeded with sample data.
// - Wire the store into the camps and talks handlers.
// - Expose the versioned REST router and the GraphQL read schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
