mod handler;

use anyhow::Context;
use async_graphql::Executor;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState<E> {
    schema: E,
}

impl<E: Executor> AppState<E> {
    pub const fn new(schema: E) -> Self {
        Self { schema }
    }
}

#[derive(Debug)]
pub struct HttpServerConfig {
    host: String,
    port: u16,
}

impl HttpServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    pub async fn new<E: Executor>(
        state: AppState<E>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        let router = Router::new()
            .merge(graphql_routes())
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .with_context(|| format!("Failed to bind to {}:{}", config.host, config.port))?;

        Ok(Self { router, listener })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read bound address")
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.local_addr()?;
        tracing::info!("Server ready at http://{addr}/");

        axum::serve(self.listener, self.router)
            .await
            .context("Received error from running server")?;
        Ok(())
    }
}

fn graphql_routes<E: Executor>() -> Router<AppState<E>> {
    Router::new().route("/", get(handler::graphiql).post(handler::graphql::<E>))
}
