use attractions_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config)?;

    tracing::info!(
        environment = %config.service.environment,
        database = %config.database.url,
        "Configuration loaded"
    );

    let state = AppState::connect(config.clone()).await?;

    Server::new(config).serve(router(state)).await
}
