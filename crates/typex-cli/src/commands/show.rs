//! Show command
//!
//! Usage: typex show <FILE> <TYPE> [--json]
//!
//! Looks the name up as an entity, classification, relationship and enum
//! type, in that order.

use std::collections::BTreeSet;

use clap::Args;
use serde_json::json;
use typex_core::model::AttributeDef;
use typex_core::TypeExplorer;

use super::config::LoadArgs;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Type name to show
    pub type_name: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ShowArgs) -> CmdResult {
    let explorer = args.load.load()?;

    let view = describe(&explorer, &args.type_name)
        .ok_or_else(|| format!("Unknown type: {}", args.type_name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(true)
}

fn join(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn attribute_lines(attributes: &[AttributeDef]) -> Vec<String> {
    attributes
        .iter()
        .map(|a| format!("{}: {}", a.name, a.type_name))
        .collect()
}

/// JSON view of one resolved type
pub fn describe(explorer: &TypeExplorer, name: &str) -> Option<serde_json::Value> {
    if let Some(d) = explorer.entity(name) {
        return Some(json!({
            "category": "entity",
            "name": d.name(),
            "guid": d.guid(),
            "supertypeChain": explorer.entity_supertype_chain(name),
            "subTypes": d.sub_type_names(),
            "attributes": attribute_lines(d.inherited_attributes()),
            "relationships": d.inherited_relationships(),
            "classifications": d.inherited_classifications(),
        }));
    }
    if let Some(d) = explorer.classification(name) {
        return Some(json!({
            "category": "classification",
            "name": d.name(),
            "guid": d.guid(),
            "supertypeChain": explorer.classification_supertype_chain(name),
            "subTypes": d.sub_type_names(),
            "attributes": attribute_lines(d.inherited_attributes()),
            "validEntityTypes": d.valid_entity_type_names(),
        }));
    }
    if let Some(d) = explorer.relationship(name) {
        let (end1, end2) = explorer.relationship_end_types(name).unwrap_or_default();
        return Some(json!({
            "category": "relationship",
            "name": d.name(),
            "guid": d.guid(),
            "end1": end1,
            "end2": end2,
        }));
    }
    explorer.enum_def(name).map(|e| {
        json!({
            "category": "enum",
            "name": e.name,
            "guid": e.guid,
            "elements": e.elements.iter().map(|el| format!("{}={}", el.ordinal, el.value)).collect::<Vec<_>>(),
            "default": e.default_value(),
        })
    })
}

fn strings(value: &serde_json::Value, key: &str) -> BTreeSet<String> {
    value[key]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn text(value: &serde_json::Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}

/// Plain-text rendering of a view produced by [`describe`]
pub fn render_text(view: &serde_json::Value) -> String {
    let mut out = format!(
        "{} type: {} (guid: {})\n",
        text(view, "category"),
        text(view, "name"),
        text(view, "guid")
    );

    match view["category"].as_str() {
        Some("entity") | Some("classification") => {
            let chain: Vec<String> = view["supertypeChain"]
                .as_array()
                .map(|c| c.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
                .unwrap_or_default();
            out.push_str(&format!("  supertypes:   {}\n", chain.join(" -> ")));
            out.push_str(&format!("  subtypes:     {}\n", join(&strings(view, "subTypes"))));
            out.push_str("  attributes:\n");
            if let Some(attrs) = view["attributes"].as_array() {
                for attr in attrs.iter().filter_map(|a| a.as_str()) {
                    out.push_str(&format!("    {}\n", attr));
                }
            }
            if view["category"] == "entity" {
                out.push_str(&format!(
                    "  relationships:   {}\n",
                    join(&strings(view, "relationships"))
                ));
                out.push_str(&format!(
                    "  classifications: {}\n",
                    join(&strings(view, "classifications"))
                ));
            } else {
                out.push_str(&format!(
                    "  valid for:    {}\n",
                    join(&strings(view, "validEntityTypes"))
                ));
            }
        }
        Some("relationship") => {
            out.push_str(&format!("  end1: {}\n", text(view, "end1")));
            out.push_str(&format!("  end2: {}\n", text(view, "end2")));
        }
        _ => {
            if let Some(elements) = view["elements"].as_array() {
                for el in elements.iter().filter_map(|e| e.as_str()) {
                    out.push_str(&format!("  {}\n", el));
                }
            }
            if let Some(default) = view["default"].as_str() {
                out.push_str(&format!("  default: {}\n", default));
            }
        }
    }
    out
}
