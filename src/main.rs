use dioxus_logger::tracing::{self, Level};

use shelfmate::{
    client::{
        service::inventory::InventoryService, store::inventory::InventoryState,
        view::expiration::ExpirationStatus,
    },
    server::{config::Config, error::Error, service::store::DatabaseStore, startup},
};

#[tokio::main]
async fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database");

    let store = DatabaseStore::new(&db);
    let inventory = InventoryService::new(&store);
    let mut state = InventoryState::new(config.expiring_soon_days);

    inventory.refresh(&mut state).await?;

    let view = inventory.view(&state);
    tracing::info!(
        "{} product(s) in {}",
        view.len(),
        state.selection_label()
    );

    for entry in view {
        let status = match entry.status(state.expiring_soon_days) {
            ExpirationStatus::Expired => format!("expired {} day(s) ago", entry.days_left),
            ExpirationStatus::ExpiringSoon => format!("expires in {} day(s)", entry.days_left),
            ExpirationStatus::Fresh => format!("{} day(s) left", entry.days_left),
        };

        tracing::info!(
            "{}: {} {} in {} ({}), {}",
            entry.product.name,
            entry.product.quantity,
            entry.unit_name,
            entry.storage_name,
            entry.category_name,
            status
        );
    }

    Ok(())
}
