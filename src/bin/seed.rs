use shop_catalog_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};
use sqlx::SqlitePool;

const CATEGORIES: &[&str] = &["Dairy", "Bakery", "Produce"];

const PRODUCTS: &[(&str, &str, i64, &str)] = &[
    ("Whole Milk", "1 litre, pasteurised", 120, "Dairy"),
    ("Cheddar", "Aged 12 months", 450, "Dairy"),
    ("Sourdough Loaf", "Baked daily", 380, "Bakery"),
    ("Apples", "1 kg bag", 250, "Produce"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let categories = seed_categories(&pool).await?;
    let products = seed_products(&pool).await?;
    pool.close().await;

    println!("Seed completed. Categories added: {categories}, products added: {products}");
    Ok(())
}

async fn seed_categories(pool: &SqlitePool) -> anyhow::Result<u64> {
    let mut added = 0;
    for name in CATEGORIES {
        let result = sqlx::query(
            r#"
            INSERT INTO categories (name)
            VALUES (?)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(*name)
        .execute(pool)
        .await?;
        added += result.rows_affected();
    }
    Ok(added)
}

// Products have no unique key, so only seed an empty table.
async fn seed_products(pool: &SqlitePool) -> anyhow::Result<u64> {
    let (count,): (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut added = 0;
    for (name, description, price, category) in PRODUCTS {
        let result = sqlx::query(
            "INSERT INTO products (name, description, price, category) VALUES (?, ?, ?, ?)",
        )
        .bind(*name)
        .bind(*description)
        .bind(*price)
        .bind(*category)
        .execute(pool)
        .await?;
        added += result.rows_affected();
    }
    Ok(added)
}
