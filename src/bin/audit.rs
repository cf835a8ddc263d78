use anyhow::Result;
use clap::Parser;
use famtree::audit::{audit_persons, AuditReport};
use famtree::{loader, Config};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "audit")]
#[command(about = "Report inconsistent links in a member collection (read-only)")]
struct Args {
    /// Member collection (JSON); overrides famtree.members_path
    #[arg(short, long)]
    members: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let config = Config::load_or_default()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", &config.famtree.log_level),
    )
    .init();

    let args = Args::parse();
    let members_path = args
        .members
        .unwrap_or_else(|| config.members_path().to_path_buf());

    let persons = loader::load_persons(&members_path)?;
    let report = audit_persons(&persons);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_report(report: &AuditReport) {
    println!("\n=== Member Collection Audit ===\n");
    println!("Records: {}", report.total_records);
    println!("Issues:  {}", report.issue_count());

    if !report.records_without_id.is_empty() {
        println!("\nRecords without a usable serNo (position):");
        for position in &report.records_without_id {
            println!("  - #{}", position);
        }
    }

    if !report.duplicate_ids.is_empty() {
        println!("\nDuplicate serNo (the last record wins):");
        for dup in &report.duplicate_ids {
            println!("  - {} appears {} times", dup.id, dup.occurrences);
        }
    }

    if !report.dangling_references.is_empty() {
        println!("\nReferences to missing members:");
        for dangling in &report.dangling_references {
            println!(
                "  - {}.{} -> {}",
                dangling.person_id, dangling.field, dangling.target_id
            );
        }
    }

    if !report.spouse_mismatches.is_empty() {
        println!("\nSpouse links not reciprocated:");
        for mismatch in &report.spouse_mismatches {
            let back = mismatch
                .spouses_spouse_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string());
            println!(
                "  - {} -> {}, but {} -> {}",
                mismatch.person_id, mismatch.spouse_id, mismatch.spouse_id, back
            );
        }
    }

    if !report.unlisted_children.is_empty() {
        println!("\nChildren missing from their parent's childrenSerNos:");
        for unlisted in &report.unlisted_children {
            println!(
                "  - {} names {} in {}",
                unlisted.child_id, unlisted.parent_id, unlisted.field
            );
        }
    }

    if report.is_clean() {
        println!("\n✅ No issues found");
    }
}
