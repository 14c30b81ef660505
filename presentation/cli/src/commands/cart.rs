use clap::Subcommand;

use business::application::cart::manager::CartManager;
use business::domain::catalog::use_cases::get_by_id::GetProductByIdParams;
use business::domain::shared::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Print the cart lines and totals
    Show,
    /// Add one unit of a catalog product
    Add { id: String },
    /// Remove a product line
    Remove { id: String },
    /// Set the quantity of a line; values below 1 remove it
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

pub async fn run(container: &DependencyContainer, command: CartCommand) -> anyhow::Result<()> {
    let mut cart = container.cart_manager();

    match command {
        CartCommand::Show => {}
        CartCommand::Add { id } => {
            let product = container
                .catalog()?
                .get_product_by_id
                .execute(GetProductByIdParams { id: id.into() })
                .await?;
            cart.add_item(&product);
        }
        CartCommand::Remove { id } => cart.remove_item(&ProductId::new(id)),
        CartCommand::Set { id, quantity } => cart.update_quantity(&ProductId::new(id), quantity),
        CartCommand::Clear => cart.clear_cart(),
    }

    print_cart(&cart);
    Ok(())
}

fn print_cart(cart: &CartManager) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:>4} x {:<32} {:>10} {:>10}",
            line.quantity,
            line.product.name,
            line.unit_price(),
            line.subtotal()
        );
    }
    println!("{} items, total {}", cart.item_count(), cart.total());
}
