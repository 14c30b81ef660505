use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use clap::Args;

use business::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use business::domain::pull_refresh::errors::RefreshError;
use business::domain::pull_refresh::model::ScrollBehavior;
use business::domain::pull_refresh::services::RefreshOperation;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Args, Debug)]
pub struct PullArgs {
    /// Touch-start y coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub from: f64,
    /// Release y coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,
    /// Distance between synthetic touch-move events
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,
}

/// Refetches the product list; the refresh a pull gesture triggers.
pub struct CatalogRefresh {
    get_products: Arc<dyn GetProductsUseCase>,
}

#[async_trait]
impl RefreshOperation for CatalogRefresh {
    async fn refresh(&self) -> Result<(), RefreshError> {
        let products = self
            .get_products
            .execute(GetProductsParams { category: None })
            .await?;
        println!("Refreshed {} products", products.len());
        Ok(())
    }
}

/// Upper bound on synthetic touch-move events in one replay.
const MAX_MOVES: usize = 10_000;

/// The y coordinates of the touch-move events between `from` and `to`, spaced
/// by `step` and always ending exactly at `to`.
fn touch_path(from: f64, to: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        bail!("--from and --to must be finite numbers");
    }
    if step.is_nan() || step <= 0.0 {
        bail!("--step must be a positive number");
    }

    let moves = ((to - from).abs() / step).ceil().max(1.0);
    if moves > MAX_MOVES as f64 {
        bail!("--step too small: the gesture would need more than {MAX_MOVES} moves");
    }
    let moves = moves as usize;

    let direction = if to >= from { 1.0 } else { -1.0 };
    let mut path: Vec<f64> = (1..moves)
        .map(|i| from + direction * step * i as f64)
        .collect();
    path.push(to);
    Ok(path)
}

pub async fn run(container: &DependencyContainer, args: PullArgs) -> anyhow::Result<()> {
    let path = touch_path(args.from, args.to, args.step)?;
    let refresh = CatalogRefresh {
        get_products: container.catalog()?.get_products.clone(),
    };
    let handler = container.pull_handler();

    // The replayed list is always scrolled to the top.
    handler.on_touch_start(0.0, args.from);

    for y in path {
        let behavior = handler.on_touch_move(0.0, y);
        let state = handler.state();
        println!(
            "y={:<8.1} distance={:<6.1} progress={:>3.0}% {}{}",
            y,
            state.pull_distance,
            handler.progress() * 100.0,
            state.phase(),
            match behavior {
                ScrollBehavior::Suppress => " (scroll suppressed)",
                ScrollBehavior::Native => "",
            }
        );
    }

    let released_at = handler.state().pull_distance;
    if released_at >= handler.config().threshold {
        println!("Released past threshold, refreshing");
    } else {
        println!("Released below threshold, nothing to do");
    }
    handler.on_touch_end(&refresh).await?;
    println!("Gesture {}", handler.state().phase());
    Ok(())
}
