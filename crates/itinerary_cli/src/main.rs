//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `itinerary_core` linkage and open a journey store.
//! - Print the stored journeys as `id<TAB>slug<TAB>countries` lines.
//!
//! The store path comes from the first argument, then `ITINERARY_DB`;
//! without either an empty in-memory store is used. Setting
//! `ITINERARY_LOG_DIR` to an absolute directory turns on file logging.

use itinerary_core::db::{open_db, open_db_in_memory};
use itinerary_core::{
    default_log_level, init_logging, Identified, JourneyService, SqliteJourneyRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("itinerary_core ping={}", itinerary_core::ping());
    println!("itinerary_core version={}", itinerary_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(log_dir) = std::env::var_os("ITINERARY_LOG_DIR") {
        init_logging(default_log_level(), log_dir)?;
    }

    let db_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ITINERARY_DB").ok());
    let conn = match db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };

    let service = JourneyService::new(SqliteJourneyRepository::try_new(&conn)?);
    for journey in service.list_journeys()? {
        println!(
            "{}\t{}\t{}",
            journey.id(),
            journey.camel_case_name(),
            journey.countries().len()
        );
    }
    Ok(())
}
