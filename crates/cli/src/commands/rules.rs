use crate::{ExitCode, RulesFormat};
use anyhow::Result;
use colored::Colorize;
use graphql_usage_linter::source_rules;

pub fn run(format: RulesFormat) -> Result<ExitCode> {
    match format {
        RulesFormat::Human => {
            for rule in source_rules() {
                let docs = rule.docs();
                println!("{}", rule.name().bold());
                println!("  {}", rule.description());
                println!(
                    "  {}: {}  {}: {}",
                    "default".dimmed(),
                    rule.default_severity(),
                    "category".dimmed(),
                    docs.category
                );
                println!("  {}", docs.url.dimmed());
                for example in docs.examples {
                    println!("\n  {}:", example.title.bold());
                    for line in example.code.lines() {
                        println!("    {line}");
                    }
                }
                println!();
            }
        }
        RulesFormat::Json => {
            let rules: Vec<serde_json::Value> = source_rules()
                .iter()
                .map(|rule| {
                    let docs = rule.docs();
                    serde_json::json!({
                        "name": rule.name(),
                        "description": rule.description(),
                        "default_severity": rule.default_severity().to_string(),
                        "category": docs.category,
                        "url": docs.url,
                        "examples": docs
                            .examples
                            .iter()
                            .map(|example| serde_json::json!({
                                "title": example.title,
                                "code": example.code,
                            }))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(ExitCode::Success)
}
