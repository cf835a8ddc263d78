use anyhow::Result;
use clap::{Parser, ValueEnum};
use famtree::{loader, Config, PersonIndex, RelationResult, RelationRuleTable};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "famtree")]
#[command(about = "Derive every named family relation of one or more members")]
struct Args {
    /// Serial number(s) of the member(s) to query
    #[arg(required = true, allow_negative_numbers = true)]
    ids: Vec<String>,

    /// Member collection (JSON); overrides famtree.members_path
    #[arg(short, long)]
    members: Option<PathBuf>,

    /// Relation rule collection (JSON); overrides famtree.rules_path
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    relations: &'a [RelationResult],
}

fn main() -> Result<()> {
    // Config first: it loads .env, which may set RUST_LOG
    let config = Config::load_or_default()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", &config.famtree.log_level),
    )
    .init();

    let args = Args::parse();

    let members_path = args
        .members
        .unwrap_or_else(|| config.members_path().to_path_buf());
    let index = PersonIndex::build(loader::load_persons(&members_path)?);

    let rules_path = args.rules.or_else(|| config.rules_path().map(PathBuf::from));
    let rules = match rules_path {
        Some(path) => match loader::load_rules(&path) {
            Ok(rules) => RelationRuleTable::build(rules),
            Err(e) => {
                log::warn!(
                    "Relation rules unavailable ({}); proceeding without translated labels",
                    e
                );
                RelationRuleTable::default()
            }
        },
        None => RelationRuleTable::default(),
    };

    let cache = config.relation_cache();
    let start = Instant::now();
    let results: Vec<Vec<RelationResult>> = args
        .ids
        .iter()
        .map(|id| match &cache {
            Some(cache) => cache.cached_relations_for(id.as_str(), &index, &rules),
            None => famtree::relations_for(id.as_str(), &index, &rules),
        })
        .collect();
    log::info!(
        "Answered {} quer{} in {:?}",
        args.ids.len(),
        if args.ids.len() == 1 { "y" } else { "ies" },
        start.elapsed()
    );

    match args.format {
        Format::Json if args.ids.len() == 1 => {
            println!("{}", serde_json::to_string_pretty(&results[0])?);
        }
        Format::Json => {
            let output: Vec<QueryOutput<'_>> = args
                .ids
                .iter()
                .zip(&results)
                .map(|(query, relations)| QueryOutput { query, relations })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Table => {
            for (query, relations) in args.ids.iter().zip(&results) {
                print_table(query, relations);
            }
        }
    }

    Ok(())
}

fn print_table(query: &str, relations: &[RelationResult]) {
    println!("\nRelations of {}: {}", query, relations.len());
    if relations.is_empty() {
        return;
    }

    let key_width = relations
        .iter()
        .map(|r| r.relation_key.chars().count())
        .max()
        .unwrap_or(0)
        .max("Relation".len());
    let label_width = relations
        .iter()
        .map(|r| r.translated_label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Label".len());

    println!(
        "{:<kw$}  {:<lw$}  {:>6}  Name",
        "Relation",
        "Label",
        "SerNo",
        kw = key_width,
        lw = label_width
    );
    println!("{:-<1$}", "", key_width + label_width + 18);
    for relation in relations {
        let id = relation
            .related
            .id
            .map(|id| id.to_string())
            .unwrap_or_default();
        println!(
            "{:<kw$}  {:<lw$}  {:>6}  {}",
            relation.relation_key,
            relation.translated_label,
            id,
            relation.related.display_name().unwrap_or_default(),
            kw = key_width,
            lw = label_width
        );
    }
}
