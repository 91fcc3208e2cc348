//! Dry run: show what would be migrated without touching Redis.

use anyhow::Result;
use lbmigrate_core::{MigrationConfig, MigrationPlan, Migrator};

use crate::output;

pub fn run(config: MigrationConfig, json: bool) -> Result<()> {
    let migrator = Migrator::new(config);

    if !json {
        println!(
            "Reading scores from {}...",
            migrator.config().input.display()
        );
    }
    let plan = migrator.plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match plan {
        MigrationPlan::NoCollection { collection } => {
            println!(
                "No data found for the '{}' collection in the JSON file",
                collection
            );
        }
        MigrationPlan::NoValidScores { .. } => {
            println!("No valid scores found to migrate");
        }
        MigrationPlan::Ready { scores } => {
            println!(
                "Found {} score(s) that would be written to '{}' (dry run):",
                scores.len(),
                migrator.config().key
            );
            output::print_scores(&scores);
        }
    }

    Ok(())
}
