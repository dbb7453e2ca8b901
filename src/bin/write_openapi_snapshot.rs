// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    corporate_site::presentation::http::openapi::write_openapi_snapshot()?;
    println!(
        "OpenAPI snapshot written to {}",
        corporate_site::presentation::http::openapi::snapshot_path()
    );
    Ok(())
}
