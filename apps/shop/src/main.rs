//! # Shop Entry Point
//!
//! Host for the shop views: adds the given products to the cart in order and
//! prints the resulting page.
//!
//! ## Usage
//! ```bash
//! # Add product 1 twice, then product 2
//! shop 1 1 2
//!
//! # Print the cart as JSON instead of the page
//! shop 1 2 --json
//!
//! # Print the loaded configuration
//! shop --config
//! ```

use std::process::ExitCode;

use clap::Parser;
use shop_core::ProductId;
use shop_lib::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "shop", version, about = "Mini shop cart")]
struct Cli {
    /// Product ids to add to the cart, in order
    product_ids: Vec<u64>,

    /// Print the cart as JSON instead of the rendered page
    #[arg(long)]
    json: bool,

    /// Print the loaded configuration as JSON
    #[arg(long, conflicts_with = "json")]
    config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    shop_lib::init_tracing();

    let ids: Vec<ProductId> = cli.product_ids.into_iter().map(ProductId::new).collect();
    let format = if cli.config {
        OutputFormat::Config
    } else if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match shop_lib::run(&ids, format) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = ?e.code, "{}", e.message);
            eprintln!("error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
