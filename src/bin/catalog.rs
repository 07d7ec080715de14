use library_phonebook::config::Config;
use library_phonebook::graphql::catalog::catalog_schema;
use library_phonebook::http::{AppState, HttpServer, HttpServerConfig};
use library_phonebook::ids::UlidGenerator;
use library_phonebook::memory::MemoryCatalogRepository;
use library_phonebook::{logging, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let (authors, books) = seed::catalog();
    let repo = MemoryCatalogRepository::with_data(authors, books, UlidGenerator)
        .with_born_policy(config.born_update_policy());

    let state = AppState::new(catalog_schema(repo));
    let server_config = HttpServerConfig::new(config.server_host(), config.server_port());
    let http_server = HttpServer::new(state, server_config).await?;
    http_server.run().await
}
