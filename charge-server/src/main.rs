use std::net::SocketAddr;

use charge_server::backend::{StubState, create_router};
use charge_server::directory::StationDataset;

/// Default listen address for the reservation backend.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Optional overrides from the environment
    let bind = std::env::var("CHARGE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let dataset = match std::env::var("CHARGE_DATASET") {
        Ok(path) => StationDataset::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("Warning: {e}. Using the bundled Seoul dataset.");
            StationDataset::seoul()
        }),
        Err(_) => StationDataset::seoul(),
    };

    println!(
        "Loaded dataset: {} ({} districts, {} stations)",
        dataset.city(),
        dataset.districts().len(),
        dataset.stations().len()
    );

    let state = StubState::new(dataset);
    let app = create_router(state);

    let addr: SocketAddr = bind.parse().unwrap_or_else(|_| {
        eprintln!("Warning: invalid CHARGE_BIND_ADDR {bind:?}. Using {DEFAULT_BIND_ADDR}.");
        SocketAddr::from(([127, 0, 0, 1], 3000))
    });

    println!("ChargeNow reservation backend listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /stations      - Stations in a region (?region=<name>)");
    println!("  POST /reservations  - Create a reservation");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
