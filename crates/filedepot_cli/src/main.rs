//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `filedepot_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use filedepot_core::db::open_db_in_memory;
use filedepot_core::FileService;
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("filedepot_core ping={}", filedepot_core::ping());
    println!("filedepot_core version={}", filedepot_core::core_version());

    // Why: one in-memory store/retrieve pass validates the SQL wiring
    // without touching the filesystem.
    let mut conn = open_db_in_memory()?;
    let service = FileService::with_sqlite_defaults();

    let file_id = service.store(&mut conn, b"smoke", &json!({ "probe": true }))?;
    let reference = service
        .retrieve(&mut conn, file_id)?
        .ok_or("stored file should be retrievable")?;

    println!(
        "filedepot_core smoke file_id={file_id} content_bytes={}",
        reference.content().len()
    );
    Ok(())
}
