//! shopgraph-console: terminal client for the product directory.

mod cli;
mod client;
mod error;
mod form;
mod prompt;
mod render;
mod state;

use clap::Parser;
use cli::{Cli, Command};
use client::ProductClient;
use render::{render_state, render_table};
use state::ProductConsole;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = ProductClient::new(cli.endpoint);
    tracing::debug!(endpoint = client.endpoint(), "using directory endpoint");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::List => {
            let mut console = ProductConsole::new(client);
            println!("{}", render_state(console.state()));
            console.load().await;
            println!("{}", render_state(console.state()));
        }
        Command::Add {
            id,
            name,
            category,
            price,
        } => {
            let mut console = ProductConsole::new(client);
            let form = console.form_mut();
            for (field, value) in [
                ("id", id),
                ("name", name),
                ("category", category),
                ("price", price),
            ] {
                form.set_by_name(field, value)?;
            }

            console.submit().await?;
            println!("{}", render_state(console.state()));
        }
        Command::Interactive => {
            let mut console = ProductConsole::new(client);
            let input = BufReader::new(tokio::io::stdin());
            prompt::run(&mut console, input, &mut std::io::stdout()).await?;
        }
        Command::Show { id } => match client.product_by_id(&id).await? {
            Some(product) => println!("{}", render_table(&[product])),
            None => println!("No product with id '{id}'"),
        },
        Command::Categories => {
            for category in client.categories().await? {
                println!("{category}");
            }
        }
        Command::ByCategory { category } => {
            println!("{}", render_table(&client.products_by_category(&category).await?));
        }
        Command::Delete { id } => {
            println!("{}", render_table(&client.delete_product(&id).await?));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
