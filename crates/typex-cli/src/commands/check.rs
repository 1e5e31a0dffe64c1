//! Classification applicability check
//!
//! Usage: typex check <FILE> --classification C --entity E
//!
//! Exits 0 when the classification may be attached to the entity type
//! (directly or through a supertype), 1 otherwise.

use clap::Args;

use super::config::LoadArgs;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    #[arg(long)]
    pub classification: String,

    #[arg(long)]
    pub entity: String,
}

pub fn execute(args: CheckArgs) -> CmdResult {
    let explorer = args.load.load()?;

    if explorer.entity(&args.entity).is_none() {
        return Err(format!("Unknown entity type: {}", args.entity).into());
    }
    if explorer.classification(&args.classification).is_none() {
        return Err(format!("Unknown classification type: {}", args.classification).into());
    }

    let valid = explorer.is_classification_valid_for_entity(&args.classification, &args.entity);
    println!(
        "{} {} valid for {}",
        args.classification,
        if valid { "is" } else { "is not" },
        args.entity
    );
    Ok(valid)
}
