//! Port definitions (interfaces)
//!
//! Ports define the boundary between the suite core and the transport.
//! Adapters in the infrastructure layer implement them.

mod api_client;

pub use api_client::{ApiClientError, StoryApi};
