//! Saga Application - Suite core
//!
//! This crate holds the suite's moving parts: the `StoryApi` port, the
//! endpoint call builders, the suite context, the fixture, and the
//! sequential scenario driver. Nothing here performs I/O directly; the
//! transport comes in through the port.

pub mod context;
pub mod driver;
pub mod endpoints;
pub mod error;
pub mod fixture;
pub mod ports;
pub mod scenario;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::SuiteContext;
pub use driver::SuiteDriver;
pub use error::{SuiteError, SuiteResult};
pub use fixture::SuiteFixture;
pub use ports::{ApiClientError, StoryApi};
pub use scenario::Scenario;
