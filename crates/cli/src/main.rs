use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter::apply_filter;
use planner::{filter::FilterQuery, query::dialect::dialect_by_name};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod schema;

#[derive(Parser)]
#[command(
    name = "sift",
    version = "0.1.0",
    about = "Compile search-bar filter expressions into parameterized SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            schema,
            entity,
            query,
            dialect,
            limit,
            offset,
            json,
        } => {
            let catalog = schema::load_catalog(&schema)?;
            let dialect =
                dialect_by_name(&dialect).ok_or_else(|| CliError::UnknownDialect(dialect))?;

            let descriptor = catalog
                .lookup_entity(&entity)
                .ok_or_else(|| filter::FilterError::UnknownEntity(entity.clone()))?;

            let mut sink = FilterQuery::new(&descriptor.table);
            let sink = apply_filter(&mut sink, &catalog, &entity, &query)?;
            if let Some(limit) = limit {
                sink.limit(limit);
            }
            if let Some(offset) = offset {
                sink.offset(offset);
            }

            info!("Rendering filter for {} ({})", entity, dialect.name());
            if json {
                println!("{}", output::render_json(sink, dialect.as_ref())?);
            } else {
                println!("{}", output::render_text(sink, dialect.as_ref()));
            }
        }
        Commands::Ast { query } => {
            let tree = search_syntax::parse(&query)?;
            let json = serde_json::to_string_pretty(&tree).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
        Commands::Schema { schema } => {
            let catalog = schema::load_catalog(&schema)?;
            let entities = catalog.entities().collect::<Vec<_>>();
            let json =
                serde_json::to_string_pretty(&entities).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}
