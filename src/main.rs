use dotenvy::dotenv;
use lectern::logging::init_logging;
use lectern::router::init_router;
use lectern::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    if let Err(e) = run().await {
        error!(error = %e, "server stopped");
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let state = init_app_state()?;
    let bind_address = state.guard_config.bind_address.clone();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "server listening");
    println!("🚀 Server running on http://{}", bind_address);
    println!("📚 Swagger UI available at http://{}/swagger-ui", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
