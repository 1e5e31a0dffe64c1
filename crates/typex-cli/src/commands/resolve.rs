//! Resolve command
//!
//! Usage: typex resolve <FILE> [--config F] [--source L] [--collect-all]

use clap::Args;

use super::config::LoadArgs;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

/// Execute resolve
pub fn execute(args: ResolveArgs) -> CmdResult {
    let explorer = args.load.load()?;
    let summary = explorer.summary();

    println!("Resolved {} (source: {})", args.load.file.display(), explorer.source_label());
    println!("  entity types:         {}", summary.entity_types);
    println!("  relationship types:   {}", summary.relationship_types);
    println!("  classification types: {}", summary.classification_types);
    println!("  enum types:           {}", summary.enum_types);

    Ok(true)
}
