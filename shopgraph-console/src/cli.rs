use crate::client::DEFAULT_ENDPOINT;
use clap::{Parser, Subcommand};

/// Browse and add products in a shopgraph directory.
#[derive(Parser, Debug)]
#[command(name = "shopgraph-console", version, about, long_about = None)]
pub struct Cli {
    /// GraphQL endpoint of the directory service.
    #[arg(long, env = "SHOPGRAPH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render the product table.
    List,

    /// Create a product and render the updated table.
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        /// Whole number.
        #[arg(long)]
        price: String,
    },

    /// Render the table, then prompt for new products until an empty ID.
    Interactive,

    /// Show a single product.
    Show { id: String },

    /// List distinct categories.
    Categories,

    /// Render products in one category.
    ByCategory { category: String },

    /// Delete the first product with this id.
    Delete { id: String },
}
