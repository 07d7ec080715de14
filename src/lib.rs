pub mod config;
pub mod graphql;
pub mod http;
pub mod ids;
pub mod logging;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod seed;
