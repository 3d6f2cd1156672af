use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter expression and print the resulting SQL
    Render {
        #[arg(long, help = "Schema definition file (.json, .yaml or .yml)")]
        schema: String,

        #[arg(long, help = "Entity the filter applies to")]
        entity: String,

        #[arg(long, help = "Filter expression, e.g. 'name:\"John Wick\" AND enable:true'")]
        query: String,

        /// SQL dialect: "postgres", "mysql" or "sqlite"
        #[arg(long, default_value = "postgres")]
        dialect: String,

        #[arg(long)]
        limit: Option<u64>,

        #[arg(long)]
        offset: Option<u64>,

        #[arg(
            long,
            help = "If set, prints SQL, parameters and joins as JSON instead of text"
        )]
        json: bool,
    },
    /// Print the parsed term tree of a filter expression as JSON
    Ast {
        #[arg(long, help = "Filter expression")]
        query: String,
    },
    /// Validate a schema definition and print the resolved entities
    Schema {
        #[arg(long, help = "Schema definition file (.json, .yaml or .yml)")]
        schema: String,
    },
}
