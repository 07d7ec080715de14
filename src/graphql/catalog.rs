use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};

use super::internal_error;
use crate::models::catalog::{
    AuthorWithBookCount, Book, BookFilter, CreateBookRequest, UpdateAuthorRequest,
};
use crate::repositories::CatalogRepository;

pub type CatalogSchema = Schema<CatalogQuery, CatalogMutation, EmptySubscription>;

type SharedCatalog = Arc<dyn CatalogRepository>;

pub fn catalog_schema(repo: impl CatalogRepository) -> CatalogSchema {
    let repo: SharedCatalog = Arc::new(repo);
    Schema::build(CatalogQuery, CatalogMutation, EmptySubscription)
        .data(repo)
        .finish()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedCatalog> {
    ctx.data::<SharedCatalog>()
}

pub struct BookObject(Book);

#[Object(name = "Books")]
impl BookObject {
    async fn title(&self) -> &str {
        self.0.title()
    }

    async fn published(&self) -> i32 {
        self.0.published()
    }

    /// Name of the book's author.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        let repo = get_repo(ctx)?;
        let author_id = self.0.author_id();
        match repo.find_author(author_id).await.map_err(internal_error)? {
            Some(author) => Ok(author.name().to_string()),
            None => Err(internal_error(format!(
                r#"Book "{}" references unknown author "{author_id}""#,
                self.0.id()
            ))),
        }
    }

    async fn genres(&self) -> &Vec<String> {
        self.0.genres()
    }

    async fn id(&self) -> &str {
        self.0.id()
    }
}

impl From<Book> for BookObject {
    fn from(book: Book) -> Self {
        Self(book)
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Authors")]
pub struct AuthorObject {
    name: String,
    book_count: usize,
    born: Option<i32>,
}

impl From<AuthorWithBookCount> for AuthorObject {
    fn from(value: AuthorWithBookCount) -> Self {
        Self {
            name: value.author().name().to_string(),
            book_count: value.book_count(),
            born: value.author().born(),
        }
    }
}

pub struct CatalogQuery;

#[Object(name = "Query")]
impl CatalogQuery {
    async fn book_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let repo = get_repo(ctx)?;
        repo.count_books().await.map_err(internal_error)
    }

    /// Number of distinct authors that have at least one book.
    async fn author_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let repo = get_repo(ctx)?;
        repo.count_authors_with_books().await.map_err(internal_error)
    }

    /// Books by `author`, or else books whose genres occur in `genre`, or else every book.
    async fn all_books(
        &self,
        ctx: &Context<'_>,
        author: Option<String>,
        genre: Option<String>,
    ) -> async_graphql::Result<Vec<BookObject>> {
        let repo = get_repo(ctx)?;
        let filter = BookFilter::from_args(author, genre);
        let books = repo.find_books(&filter).await.map_err(internal_error)?;
        Ok(books.into_iter().map(BookObject::from).collect())
    }

    async fn all_authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AuthorObject>> {
        let repo = get_repo(ctx)?;
        let authors = repo.find_all_authors().await.map_err(internal_error)?;
        Ok(authors.into_iter().map(AuthorObject::from).collect())
    }
}

pub struct CatalogMutation;

#[Object(name = "Mutation")]
impl CatalogMutation {
    /// Add a book, registering its author first when the name is new.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: String,
        published: i32,
        genres: Vec<String>,
    ) -> async_graphql::Result<Option<BookObject>> {
        let repo = get_repo(ctx)?;
        let req = CreateBookRequest::new(title, author, published, genres);
        let book = repo.create_book(&req).await.map_err(internal_error)?;
        Ok(Some(book.into()))
    }

    /// Set an author's birth year. Returns null for an unknown name.
    async fn edit_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        set_born_to: i32,
    ) -> async_graphql::Result<Option<AuthorObject>> {
        let repo = get_repo(ctx)?;
        let req = UpdateAuthorRequest::new(name, set_born_to);
        let Some(author) = repo.update_author(&req).await.map_err(internal_error)? else {
            return Ok(None);
        };

        let filter = BookFilter::ByAuthor(author.name().to_string());
        let book_count = repo.find_books(&filter).await.map_err(internal_error)?.len();
        Ok(Some(AuthorWithBookCount::new(author, book_count).into()))
    }
}
