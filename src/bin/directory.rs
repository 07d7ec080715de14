use library_phonebook::config::Config;
use library_phonebook::graphql::directory::directory_schema;
use library_phonebook::http::{AppState, HttpServer, HttpServerConfig};
use library_phonebook::ids::UlidGenerator;
use library_phonebook::memory::MemoryDirectoryRepository;
use library_phonebook::{logging, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let repo = MemoryDirectoryRepository::with_data(seed::persons(), UlidGenerator);

    let state = AppState::new(directory_schema(repo));
    let server_config = HttpServerConfig::new(config.server_host(), config.server_port());
    let http_server = HttpServer::new(state, server_config).await?;
    http_server.run().await
}
