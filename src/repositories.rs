use crate::models::catalog::{
    Author, AuthorId, AuthorWithBookCount, Book, BookFilter, CreateBookError, CreateBookRequest,
    FindAllAuthorsError, FindAuthorError, FindBooksError, UpdateAuthorError, UpdateAuthorRequest,
};
use crate::models::directory::{
    CreatePersonError, CreatePersonRequest, FindPersonError, FindPersonsError, Person,
    PhoneFilter, UpdatePhoneError, UpdatePhoneRequest,
};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn count_books(&self) -> Result<usize, FindBooksError>;

    /// Counts distinct authors referenced by at least one book.
    async fn count_authors_with_books(&self) -> Result<usize, FindBooksError>;

    async fn find_books(&self, filter: &BookFilter) -> Result<Vec<Book>, FindBooksError>;

    async fn find_author(&self, id: &AuthorId) -> Result<Option<Author>, FindAuthorError>;

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, FindAuthorError>;

    async fn find_all_authors(&self) -> Result<Vec<AuthorWithBookCount>, FindAllAuthorsError>;

    async fn create_book(&self, req: &CreateBookRequest) -> Result<Book, CreateBookError>;

    /// Returns `None` when no author has the requested name.
    async fn update_author(
        &self,
        req: &UpdateAuthorRequest,
    ) -> Result<Option<Author>, UpdateAuthorError>;
}

#[async_trait]
pub trait DirectoryRepository: Send + Sync + 'static {
    async fn count_persons(&self) -> Result<usize, FindPersonsError>;

    async fn find_persons(
        &self,
        filter: Option<PhoneFilter>,
    ) -> Result<Vec<Person>, FindPersonsError>;

    async fn find_person(&self, name: &str) -> Result<Option<Person>, FindPersonError>;

    async fn create_person(&self, req: &CreatePersonRequest) -> Result<Person, CreatePersonError>;

    /// Returns `None` when no person has the requested name.
    async fn update_phone(
        &self,
        req: &UpdatePhoneRequest,
    ) -> Result<Option<Person>, UpdatePhoneError>;
}
