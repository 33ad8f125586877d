use std::collections::BTreeMap;

use clap::Args;
use eyre::{Result, WrapErr};
use jackgen_schema::TypeGraph;

use super::UnwrapOrExit;
use crate::sources::SourceArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print the loaded type graph as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.sources.config()?;
        let sources = self.sources.open(config.as_ref())?;
        let graph = jackgen_schema::load(&sources).unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&graph).wrap_err("Failed to serialize type graph")?;
            println!("{}", json);
            return Ok(());
        }

        let source_count = sources.len();
        println!(
            "✓ {} source{} loaded ({} types)\n",
            source_count,
            if source_count == 1 { "" } else { "s" },
            graph.len()
        );
        print!("{}", summary(&graph));
        Ok(())
    }
}

/// Human-readable overview of top-levels and named types.
fn summary(graph: &TypeGraph) -> String {
    let mut out = String::new();

    out.push_str("  Top-levels:\n");
    for (name, ty) in graph.top_levels() {
        let node = graph.node(ty);
        match graph.resolve_named(ty) {
            Some(named) => out.push_str(&format!(
                "    {} -> {} {}\n",
                name,
                named.kind(),
                named.combined_name().unwrap_or_default()
            )),
            None => out.push_str(&format!("    {} -> {}\n", name, node.kind())),
        }
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let named: Vec<_> = graph.named_types().collect();
    for node in &named {
        *counts.entry(node.kind().to_string()).or_default() += 1;
    }
    if named.is_empty() {
        return out;
    }

    out.push_str("\n  Named types:\n");
    for node in &named {
        let detail = match (node.as_class(), node.as_enum(), node.as_union()) {
            (Some(c), _, _) => format!("{} properties", c.len()),
            (_, Some(e), _) => format!("{} cases", e.cases.len()),
            (_, _, Some(u)) => format!("{} members", u.members.len()),
            _ => String::new(),
        };
        out.push_str(&format!(
            "    {:<6} {} ({})\n",
            node.kind().as_str(),
            node.combined_name().unwrap_or_default(),
            detail
        ));
    }

    let totals: Vec<String> = counts
        .iter()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect();
    out.push_str(&format!("\n  Total: {}\n", totals.join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let graph = jackgen_schema::load_str(
            "Order",
            r#"{
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "status": { "enum": ["open", "closed"] }
                }
            }"#,
        )
        .unwrap();

        let summary = summary(&graph);
        assert!(summary.contains("    Order -> class Order\n"));
        assert!(summary.contains("    class  Order (2 properties)\n"));
        assert!(summary.contains("    enum   Status (2 cases)\n"));
        assert!(summary.contains("  Total: 1 class, 1 enum\n"));
    }

    #[test]
    fn test_summary_unnamed_top_level() {
        let graph = jackgen_schema::load_str("Tags", r#"{ "type": "array" }"#).unwrap();
        assert_eq!(summary(&graph), "  Top-levels:\n    Tags -> array\n");
    }
}
