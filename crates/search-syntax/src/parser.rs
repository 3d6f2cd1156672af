use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/search.pest"]
pub struct SearchParser;
