//! GraphQL schemas for the catalog and directory services.
//!
//! ## Catalog
//!
//! - **Queries**: `bookCount`, `authorCount`, `allBooks`, `allAuthors`
//! - **Mutations**: `addBook`, `editAuthor`
//!
//! ## Directory
//!
//! - **Queries**: `personCount`, `allPersons`, `findPerson`
//! - **Mutations**: `addPerson`, `editNumber`

pub mod catalog;
pub mod directory;

use crate::models::directory::CreatePersonError;
use async_graphql::{Error, ErrorExtensions};

const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

impl ErrorExtensions for CreatePersonError {
    fn extend(&self) -> Error {
        match self {
            Self::Duplicate { name } => {
                Error::new("Name must be unique.").extend_with(|_, e| {
                    e.set("code", BAD_USER_INPUT);
                    e.set("invalidArgs", name.as_str());
                })
            }
            Self::Other(cause) => internal_error(cause),
        }
    }
}

/// Logs `err` and hides it behind a generic message.
fn internal_error(err: impl std::fmt::Display) -> Error {
    tracing::error!(error = %err, "resolver failed");
    Error::new("Internal server error").extend_with(|_, e| e.set("code", INTERNAL_SERVER_ERROR))
}
