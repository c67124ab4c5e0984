//! One end-to-end run: (start stub) → fetch → validate → print → (write JSON).

use std::io::Write;
use std::net::SocketAddr;

use anyhow::Context;
use chrono::Utc;

use crate::client::ProductClient;
use crate::config::{Settings, Source};
use crate::console;
use crate::report::Report;
use crate::stub::StubServer;

/// Execute a run, writing the console report to `out`.
///
/// Errors are fatal: the stub could not start or the products could not be fetched.
/// A JSON report that cannot be written is reported on `out` and does not fail the run.
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> anyhow::Result<Report> {
    let (stub, url) = match &settings.source {
        Source::Mock { port } => {
            let addr = SocketAddr::from(([127, 0, 0, 1], *port));
            let stub = StubServer::spawn_sample(addr)
                .await
                .context("Error starting mock server")?;
            let url = stub.products_url();
            writeln!(out, "Starting mock server at {url}")?;
            (Some(stub), url)
        }
        Source::Remote { url } => (None, url.clone()),
    };

    console::render_banner(out, &url)?;

    let client = ProductClient::new(url.as_str()).context("Error fetching products")?;
    let fetched = match client.fetch_products().await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, status = ?e.status(), "fetch failed");
            return Err(e).context("Error fetching products");
        }
    };
    if fetched.status != crate::report::EXPECTED_STATUS {
        tracing::warn!(status = fetched.status, "unexpected status code");
    }

    let report = Report::build(url, fetched.status, &fetched.products, Utc::now());
    tracing::info!(
        total = report.total_products,
        defects = report.defect_count,
        "validation finished"
    );
    console::render_report(out, &report)?;

    if let Some(path) = &settings.json_output {
        match report.write_json(path) {
            Ok(()) => writeln!(out, "\nJSON report written to {}", path.display())?,
            Err(e) => {
                tracing::warn!(error = %e, "JSON report not written");
                writeln!(out, "\nError writing JSON report: {e}")?;
            }
        }
    }

    if let Some(stub) = stub.as_ref().filter(|_| settings.wait_for_shutdown) {
        writeln!(out, "\nMock server is running. Press Ctrl+C to exit.")?;
        out.flush()?;
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for Ctrl+C")?;
        tracing::info!(addr = %stub.local_addr(), "shutting down mock server");
    }

    out.flush()?;
    Ok(report)
}
