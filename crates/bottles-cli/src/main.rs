mod configure;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bottles-cli")]
#[command(about = "Best Bottles product configurator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List product ids in the fixture catalog
    Products,
    /// Print the composite (layers, SKU, price) for a selection
    Show(SelectArgs),
    /// Print the cart line for a selection
    Cart(SelectArgs),
    /// Flatten the layer stack for a selection into a PNG
    Render {
        #[command(flatten)]
        select: SelectArgs,
        /// Output PNG path
        #[arg(long, short)]
        out: PathBuf,
        /// Directory that relative layer image paths resolve against
        #[arg(long, default_value = ".")]
        assets_dir: PathBuf,
    },
}

/// Selection applied on top of the product defaults, in glass, fitment, cap
/// order.
#[derive(Debug, Clone, Args)]
pub(crate) struct SelectArgs {
    /// Product id or slug
    pub product_id: String,
    #[arg(long)]
    pub glass: Option<String>,
    #[arg(long, conflicts_with = "no_fitment")]
    pub fitment: Option<String>,
    /// Clear the default fitment
    #[arg(long)]
    pub no_fitment: bool,
    /// Cap id, or cap swatch id on fused products
    #[arg(long)]
    pub cap: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = bottles_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = bottles_catalog::Catalog::from_app_config(&config)
        .context("failed to build catalog source")?;

    match cli.command {
        Commands::Products => {
            let ids = catalog
                .product_ids()
                .context("listing products requires BOTTLES_CATALOG_FIXTURE")?;
            for id in ids {
                println!("{id}");
            }
        }
        Commands::Show(select) => {
            let ctl = configure::build_controller(&catalog, &config, &select).await?;
            let out = serde_json::json!({
                "selection": ctl.selection(),
                "composite": ctl.current(),
                "selectors": bottles_configurator::selector_panel(ctl.config(), ctl.selection()),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Cart(select) => {
            let ctl = configure::build_controller(&catalog, &config, &select).await?;
            let mut line = serde_json::to_value(ctl.cart_line())?;
            line["currency"] = serde_json::Value::String(config.currency_code.clone());
            println!("{}", serde_json::to_string_pretty(&line)?);
        }
        Commands::Render {
            select,
            out,
            assets_dir,
        } => {
            let ctl = configure::build_controller(&catalog, &config, &select).await?;
            let canvas = bottles_configurator::Canvas::square(config.canvas_size);
            let plan = bottles_configurator::render_plan(ctl.current(), canvas);
            render::write_png(&plan, &assets_dir, &out)?;
            eprintln!("wrote {}", out.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
