use harbor_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    schemas: Vec<&'static str>,
    count: usize,
}

/// Handle `hbr schema`. Needs neither configuration nor the store.
pub fn handle(action: &SchemaCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match action {
        SchemaCommands::List => {
            let schemas = registry.list();
            output(
                &ListResponse {
                    count: schemas.len(),
                    schemas,
                },
                flags.format,
            )
        }
        SchemaCommands::Get { name } => {
            let schema = registry.get(name).ok_or_else(|| {
                anyhow::anyhow!("unknown schema '{name}'; run `hbr schema list` to see registered names")
            })?;
            output(schema, flags.format)
        }
    }
}
