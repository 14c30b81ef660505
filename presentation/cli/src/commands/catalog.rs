use business::domain::catalog::model::Product;
use business::domain::catalog::use_cases::get_by_id::GetProductByIdParams;
use business::domain::catalog::use_cases::get_products::GetProductsParams;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn list_products(
    container: &DependencyContainer,
    category: Option<String>,
) -> anyhow::Result<()> {
    let products = container
        .catalog()?
        .get_products
        .execute(GetProductsParams { category })
        .await?;

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }
    for product in &products {
        println!("{}", summary(product));
    }
    Ok(())
}

pub async fn list_categories(container: &DependencyContainer) -> anyhow::Result<()> {
    let categories = container.catalog()?.get_categories.execute().await?;

    for category in &categories {
        println!(
            "{:<16} {} {} ({} products)",
            category.id, category.icon, category.name, category.product_count
        );
    }
    Ok(())
}

pub async fn show_product(container: &DependencyContainer, id: String) -> anyhow::Result<()> {
    let product = container
        .catalog()?
        .get_product_by_id
        .execute(GetProductByIdParams { id: id.into() })
        .await?;

    println!("{}", summary(&product));
    println!("  {}", product.description);
    println!(
        "  rating {:.1} from {} reviews, category {}",
        product.rating, product.review_count, product.category
    );
    Ok(())
}

fn summary(product: &Product) -> String {
    let price = match product.original_price {
        Some(original) if product.is_discounted() => {
            format!("{} (was {})", product.price, original)
        }
        _ => product.price.to_string(),
    };
    let stock = if product.in_stock { "" } else { " [out of stock]" };
    format!("{:<16} {} {}{}", product.id, product.name, price, stock)
}
