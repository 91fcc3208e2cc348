//! Migrate command: connect, load, write and verify.

use anyhow::Result;
use lbmigrate_core::{MigrationConfig, MigrationPlan, Migrator, RedisStore};

use crate::output;

/// Run the migration
pub fn run(config: MigrationConfig, json: bool) -> Result<()> {
    let url = config.redis_url()?.to_string();
    let migrator = Migrator::new(config);

    if !json {
        println!("Connecting to Redis...");
    }
    let mut store = RedisStore::connect(&url)?;

    if json {
        let outcome = migrator.run(&mut store)?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    output::print_success("Connection to Redis successful");

    let config = migrator.config();
    println!("Reading scores from {}...", config.input.display());

    let scores = match migrator.plan()? {
        MigrationPlan::NoCollection { collection } => {
            println!(
                "No data found for the '{}' collection in the JSON file",
                collection
            );
            return Ok(());
        }
        MigrationPlan::NoValidScores { .. } => {
            println!("No valid scores found to migrate");
            return Ok(());
        }
        MigrationPlan::Ready { scores } => scores,
    };

    println!(
        "Found {} score(s) to migrate - Attempting to write to Redis...",
        scores.len()
    );
    migrator.write(&mut store, &scores)?;
    output::print_success("Write command sent successfully");

    println!("\n--- Verification Step ---");
    let verification = migrator.verify(&mut store)?;
    output::print_success(&format!(
        "SUCCESS! Found {} item(s) in the Redis database",
        verification.cardinality
    ));
    output::print_leaderboard(&verification.leaderboard);

    Ok(())
}
