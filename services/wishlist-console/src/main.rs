use std::fmt;

use clap::Parser;
use tracing::info;
use wl_client::{ClientConfig, ReqwestTransport, WishlistClient};
use wl_form::{Action, Controller, FormView};

/// Drive the wishlist form from the command line: one action, one request.
#[derive(Debug, Parser)]
#[command(name = "wishlist-console", version)]
struct Cli {
    /// Button to press: create, update, retrieve, search, delete, empty,
    /// create-item, retrieve-item, update-item, search-item, delete-item, clear
    action: Action,

    /// API origin (falls back to WISHLIST_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Resource base path (falls back to WISHLIST_BASE_PATH)
    #[arg(long)]
    base_path: Option<String>,

    #[arg(long, default_value = "")]
    wishlist_id: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    owner_id: String,
    #[arg(long, default_value = "")]
    item_id: String,
    #[arg(long, default_value = "")]
    product_name: String,
    #[arg(long, default_value = "")]
    product_id: String,
    #[arg(long, default_value = "")]
    quantity: String,
}

impl Cli {
    fn form(&self) -> FormView {
        FormView {
            wishlist_id: self.wishlist_id.clone(),
            wishlist_name: self.name.clone(),
            owner_id: self.owner_id.clone(),
            item_id: self.item_id.clone(),
            product_name: self.product_name.clone(),
            product_id: self.product_id.clone(),
            item_quantity: self.quantity.clone(),
            ..FormView::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.api_url.clone(), cli.base_path.clone());
    info!(api_url = %config.api_url, base_path = %config.base_path, "wishlist-console starting");

    let client = WishlistClient::new(ReqwestTransport::from_config(&config), config.endpoints());
    let controller = Controller::new(client);

    let view = controller.dispatch(cli.action, &cli.form()).await;
    print!("{}", Report(&view));

    Ok(())
}

/// Plain-text rendering of the form after an action.
struct Report<'a>(&'a FormView);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let fields = [
            ("Wishlist ID", &view.wishlist_id),
            ("Name", &view.wishlist_name),
            ("Owner ID", &view.owner_id),
            ("Item ID", &view.item_id),
            ("Product Name", &view.product_name),
            ("Product ID", &view.product_id),
            ("Quantity", &view.item_quantity),
        ];
        for (label, value) in fields {
            writeln!(f, "{label:<13}{value}")?;
        }
        writeln!(f, "\n{}", view.flash)?;
        if let Some(table) = &view.wishlist_results {
            write!(f, "\n{table}")?;
        }
        if let Some(table) = &view.item_results {
            write!(f, "\n{table}")?;
        }
        Ok(())
    }
}
