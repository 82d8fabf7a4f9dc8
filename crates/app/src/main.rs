//! Saga - story service conformance suite entry point.
//!
//! Wires the reqwest transport to the suite core, runs the fixture and the
//! ordered scenarios, prints the report, and exits nonzero when any
//! scenario failed.

use std::process::ExitCode;

use saga_application::{SuiteDriver, SuiteFixture};
use saga_infrastructure::{ReqwestStoryApi, SuiteConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match SuiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let api = match ReqwestStoryApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("failed to build the HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fixture = SuiteFixture::new(&config.username_prefix);
    let mut context = match fixture.setup(&api).await {
        Ok(context) => context,
        Err(e) => {
            error!("aborting: {e}");
            return ExitCode::FAILURE;
        }
    };

    let driver = SuiteDriver::new(&api);
    let report = driver.run(&mut context).await;
    fixture.teardown(&report);

    println!("{report}");
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
