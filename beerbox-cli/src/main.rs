//! Beerbox CLI
//!
//! Command-line interface for the Beerbox API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use beerbox_client::BeerboxClient;
use beerbox_types::{CreateProductRequest, ProductId};

#[derive(Parser)]
#[command(name = "beerbox")]
#[command(author, version, about = "Beerbox API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Beerbox API
    #[arg(
        long,
        env = "BEERBOX_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Beer catalogue operations
    Beer {
        #[command(subcommand)]
        action: BeerCommands,
    },
    /// Price a box of beers
    Price {
        /// Beer ID
        id: String,
        /// Payment currency (server default: USD)
        #[arg(long)]
        currency: Option<String>,
        /// Number of beers in the box (server default: 6)
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum BeerCommands {
    /// Add a beer to the catalogue
    Create {
        /// Beer name
        name: String,
        /// Unit price in the beer's currency
        #[arg(long)]
        price: f64,
        /// Currency the price is denominated in
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long, default_value = "")]
        brewery: String,
        #[arg(long, default_value = "")]
        country: String,
    },
    /// Get beer details
    Get {
        /// Beer ID
        id: String,
    },
    /// List all beers
    List,
}

fn parse_beer_id(s: &str) -> Result<ProductId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid beer ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = BeerboxClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Beer { action } => match action {
            BeerCommands::Create {
                name,
                price,
                currency,
                brewery,
                country,
            } => {
                let req = CreateProductRequest {
                    name,
                    brewery,
                    country,
                    price,
                    currency,
                };
                let beer = client.create_beer(&req).await?;
                println!("{}", serde_json::to_string_pretty(&beer)?);
            }
            BeerCommands::Get { id } => {
                let beer = client.get_beer(parse_beer_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&beer)?);
            }
            BeerCommands::List => {
                let beers = client.list_beers().await?;
                println!("{}", serde_json::to_string_pretty(&beers)?);
            }
        },

        Commands::Price {
            id,
            currency,
            quantity,
        } => {
            let result = client
                .box_price(parse_beer_id(&id)?, currency.as_deref(), quantity)
                .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
