//! Name <-> guid lookup
//!
//! Usage: typex lookup <FILE> (--name N | --guid G)
//!
//! Entity types are searched before relationship types.

use clap::Args;

use super::config::LoadArgs;
use super::CmdResult;

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Type name to translate to a guid
    #[arg(long, conflicts_with = "guid", required_unless_present = "guid")]
    pub name: Option<String>,

    /// Guid to translate to a type name
    #[arg(long, conflicts_with = "name")]
    pub guid: Option<String>,
}

pub fn execute(args: LookupArgs) -> CmdResult {
    let explorer = args.load.load()?;

    let found = match (&args.name, &args.guid) {
        (Some(name), _) => explorer
            .entity_guid_for_name(name)
            .map(|g| ("entity", g))
            .or_else(|| {
                explorer
                    .relationship_guid_for_name(name)
                    .map(|g| ("relationship", g))
            }),
        (None, Some(guid)) => explorer
            .entity_name_for_guid(guid)
            .map(|n| ("entity", n))
            .or_else(|| {
                explorer
                    .relationship_name_for_guid(guid)
                    .map(|n| ("relationship", n))
            }),
        (None, None) => return Err("Must specify either --name or --guid".into()),
    };

    match found {
        Some((category, value)) => {
            println!("{} ({})", value, category);
            Ok(true)
        }
        None => {
            let key = args.name.as_deref().or(args.guid.as_deref()).unwrap_or_default();
            eprintln!("No entity or relationship type found for {}", key);
            Ok(false)
        }
    }
}
