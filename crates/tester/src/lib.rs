//! Product catalog API tester: fetch, validate, report.
//!
//! - `client.rs`: HTTP fetch of the product list
//! - `stub/`: self-test server with a fixed defective catalog
//! - `report.rs`: run report + JSON output
//! - `console.rs`: human-readable rendering
//! - `config.rs`: CLI flags / environment
//! - `run.rs`: orchestration used by `main.rs`

pub mod client;
pub mod config;
pub mod console;
pub mod report;
pub mod run;
pub mod stub;

pub use client::{FetchError, FetchedProducts, ProductClient};
pub use config::{Cli, Settings, Source};
pub use report::{Report, ReportError};
pub use stub::{Payload, StubServer};
