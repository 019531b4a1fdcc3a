//! # Catalog Recipe Demo
//!
//! Runs the transform examples, then a short catalog session:
//! 1. Starting the [`CatalogSystem`].
//! 2. Inserting two products.
//! 3. Updating the stock of one of them.
//! 4. Listing the catalog and shutting down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p catalog-recipe
//! ```

use actor_framework::ActorClient;
use catalog_recipe::config::CatalogConfig;
use catalog_recipe::lifecycle::{setup_tracing, CatalogSystem};
use catalog_recipe::model::{
    CategoryId, CreateProductDto, FindProductDto, ProductId, Size, UpdateProductDto,
};
use catalog_recipe::transform::{ParseStr, TextOrChars};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the defaults apply.
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting catalog recipe");

    // --- Transform ---
    let chars: Vec<String> = "Nico".parse_str();
    info!(?chars, "'Nico' => chars");
    let text: String = chars.parse_str();
    info!(%text, "chars => text");
    let tagged = TextOrChars::from("Rust").transform();
    info!(?tagged, "tagged transform");

    // --- Catalog ---
    let system = CatalogSystem::with_config(config);

    let span = tracing::info_span!("seeding");
    let (shirt, _shoes) = async {
        let shirt = system
            .product_client
            .insert(CreateProductDto {
                title: "Shirt".to_string(),
                color: "blue".to_string(),
                description: "Cotton shirt".to_string(),
                stock: 12,
                size: Some(Size::M),
                tags: vec!["summer".to_string()],
                category_id: CategoryId::from("clothing"),
            })
            .await?;
        let shoes = system
            .product_client
            .insert(CreateProductDto {
                title: "Sneakers".to_string(),
                color: "white".to_string(),
                description: "Canvas sneakers".to_string(),
                stock: 4,
                size: None,
                tags: vec![],
                category_id: CategoryId::from("shoes"),
            })
            .await?;
        Ok::<_, anyhow::Error>((shirt, shoes))
    }
    .instrument(span)
    .await?;

    info!(id = %shirt.id, category = %shirt.category.name, "Shirt created");

    let updated = system
        .product_client
        .update_by_id(
            shirt.id.clone(),
            UpdateProductDto {
                stock: Some(5),
                ..Default::default()
            },
        )
        .await?;
    info!(id = %updated.id, stock = updated.stock, "Stock updated");

    // Unknown ids are reported, not papered over.
    if let Err(e) = system
        .product_client
        .update_by_id(ProductId::from("does-not-exist"), UpdateProductDto::default())
        .await
    {
        warn!(error = %e, "Update rejected");
    }

    let products = system.product_client.list(FindProductDto::new(["summer"])).await?;
    for product in &products {
        info!(id = %product.id, title = %product.title, stock = product.stock, "Listed");
    }

    system.shutdown().await?;

    info!("Catalog recipe completed successfully");
    Ok(())
}
