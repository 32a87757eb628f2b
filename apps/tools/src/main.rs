use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::domain::{ProductDraft, ProductId};
use storage::Storage;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "sqlite://./data/products.db")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Add {
        name: String,
        description: String,
        price: f64,
        quantity: i64,
    },
    Remove {
        id: i64,
    },
    SeedDemo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = Storage::new(&cli.database_url).await?;

    match cli.command {
        Command::List => {
            let products = storage.list_products().await?;
            if products.is_empty() {
                println!("no products");
            }
            for product in products {
                println!(
                    "{}\t{}\t{}\t{:.2}\t{}",
                    product.id, product.name, product.description, product.price, product.quantity
                );
            }
        }
        Command::Add {
            name,
            description,
            price,
            quantity,
        } => {
            let product = storage
                .create_product(&ProductDraft {
                    name,
                    description,
                    price,
                    quantity,
                })
                .await?;
            println!("created product_id={}", product.id);
        }
        Command::Remove { id } => {
            if storage.delete_product(ProductId(id)).await? {
                println!("removed product_id={id}");
            } else {
                println!("no product with id={id}");
            }
        }
        Command::SeedDemo => {
            for (name, description, price, quantity) in [
                ("Desk lamp", "Adjustable arm, warm white", 34.5, 12),
                ("Notebook", "A5 dotted, 120 pages", 6.9, 40),
                ("Mechanical keyboard", "Tenkeyless, brown switches", 89.0, 5),
            ] {
                let product = storage
                    .create_product(&ProductDraft {
                        name: name.to_string(),
                        description: description.to_string(),
                        price,
                        quantity,
                    })
                    .await?;
                println!("seeded product_id={} {}", product.id, product.name);
            }
        }
    }

    Ok(())
}
