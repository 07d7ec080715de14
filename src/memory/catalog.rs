use crate::ids::IdGenerator;
use crate::models::catalog::{
    Author, AuthorId, AuthorWithBookCount, Book, BookFilter, BornUpdatePolicy, CreateBookError,
    CreateBookRequest, FindAllAuthorsError, FindAuthorError, FindBooksError, UpdateAuthorError,
    UpdateAuthorRequest,
};
use crate::repositories::CatalogRepository;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CatalogState {
    authors: Vec<Author>,
    books: Vec<Book>,
    author_ids_by_name: HashMap<String, AuthorId>,
}

impl CatalogState {
    fn author(&self, id: &AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    fn author_by_name(&self, name: &str) -> Option<&Author> {
        let id = self.author_ids_by_name.get(name)?;
        self.author(id)
    }

    fn push_author(&mut self, author: Author) {
        self.author_ids_by_name
            .entry(author.name().to_string())
            .or_insert_with(|| author.id().clone());
        self.authors.push(author);
    }
}

pub struct MemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
    ids: Box<dyn IdGenerator>,
    born_policy: BornUpdatePolicy,
}

impl MemoryCatalogRepository {
    pub fn new(ids: impl IdGenerator) -> Self {
        Self::with_data(Vec::new(), Vec::new(), ids)
    }

    /// Creates a store holding `authors` and `books` in the given order.
    pub fn with_data(authors: Vec<Author>, books: Vec<Book>, ids: impl IdGenerator) -> Self {
        let mut state = CatalogState {
            books,
            ..CatalogState::default()
        };
        for author in authors {
            state.push_author(author);
        }

        Self {
            state: Arc::new(RwLock::new(state)),
            ids: Box::new(ids),
            born_policy: BornUpdatePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_born_policy(mut self, policy: BornUpdatePolicy) -> Self {
        self.born_policy = policy;
        self
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn count_books(&self) -> Result<usize, FindBooksError> {
        Ok(self.state.read().await.books.len())
    }

    async fn count_authors_with_books(&self) -> Result<usize, FindBooksError> {
        let state = self.state.read().await;
        let referenced: HashSet<&AuthorId> = state.books.iter().map(Book::author_id).collect();
        Ok(referenced.len())
    }

    async fn find_books(&self, filter: &BookFilter) -> Result<Vec<Book>, FindBooksError> {
        let state = self.state.read().await;
        let books = match filter {
            BookFilter::All => state.books.clone(),
            BookFilter::ByAuthor(name) => match state.author_ids_by_name.get(name) {
                Some(id) => state
                    .books
                    .iter()
                    .filter(|book| book.author_id() == id)
                    .cloned()
                    .collect(),
                None => Vec::new(),
            },
            BookFilter::ByGenre(genre) => state
                .books
                .iter()
                .filter(|book| book.genre_occurs_in(genre))
                .cloned()
                .collect(),
        };

        Ok(books)
    }

    async fn find_author(&self, id: &AuthorId) -> Result<Option<Author>, FindAuthorError> {
        Ok(self.state.read().await.author(id).cloned())
    }

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, FindAuthorError> {
        Ok(self.state.read().await.author_by_name(name).cloned())
    }

    async fn find_all_authors(&self) -> Result<Vec<AuthorWithBookCount>, FindAllAuthorsError> {
        let state = self.state.read().await;
        let authors = state
            .authors
            .iter()
            .map(|author| {
                let book_count = state
                    .books
                    .iter()
                    .filter(|book| book.author_id() == author.id())
                    .count();
                AuthorWithBookCount::new(author.clone(), book_count)
            })
            .collect();

        Ok(authors)
    }

    async fn create_book(&self, req: &CreateBookRequest) -> Result<Book, CreateBookError> {
        let mut state = self.state.write().await;

        let existing = state.author_ids_by_name.get(req.author()).cloned();
        let author_id = match existing {
            Some(id) => id,
            None => {
                let author = Author::new(
                    AuthorId::new(self.ids.generate()),
                    req.author().to_string(),
                    None,
                );
                let id = author.id().clone();
                tracing::info!(author = req.author(), %id, "author added");
                state.push_author(author);
                id
            }
        };

        let book = Book::new(
            self.ids.generate(),
            req.title().to_string(),
            req.published(),
            author_id,
            req.genres().clone(),
        );
        state.books.push(book.clone());
        tracing::info!(title = book.title(), id = book.id(), "book added");

        Ok(book)
    }

    async fn update_author(
        &self,
        req: &UpdateAuthorRequest,
    ) -> Result<Option<Author>, UpdateAuthorError> {
        let mut state = self.state.write().await;

        let Some(id) = state.author_ids_by_name.get(req.name()).cloned() else {
            return Ok(None);
        };
        let Some(stored) = state.authors.iter_mut().find(|author| *author.id() == id) else {
            return Err(UpdateAuthorError(anyhow::anyhow!(
                r#"Author index points at missing author "{id}""#
            )));
        };

        let updated = stored.clone().with_born(req.born());
        match self.born_policy {
            BornUpdatePolicy::Persist => {
                *stored = updated.clone();
                tracing::info!(author = req.name(), born = req.born(), "author born year updated");
            }
            BornUpdatePolicy::Discard => {
                tracing::debug!(author = req.name(), "author born year update discarded");
            }
        }

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::seed;

    fn seeded() -> MemoryCatalogRepository {
        let (authors, books) = seed::catalog();
        MemoryCatalogRepository::with_data(authors, books, SequentialIds::new("new"))
    }

    fn add_book_request(author: &str) -> CreateBookRequest {
        CreateBookRequest::new(
            "Pimeyden tango".into(),
            author.into(),
            1997,
            vec!["crime".into(), "design".into()],
        )
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(Book::title).collect()
    }

    #[tokio::test]
    async fn counts_seeded_books_and_authors() {
        let repo = seeded();
        assert_eq!(repo.count_books().await.unwrap(), 7);
        assert_eq!(repo.count_authors_with_books().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn author_count_ignores_authors_without_books() {
        let repo = MemoryCatalogRepository::with_data(
            vec![Author::new(AuthorId::new("a-1"), "Nobody".into(), None)],
            Vec::new(),
            SequentialIds::new("new"),
        );

        assert_eq!(repo.count_authors_with_books().await.unwrap(), 0);
        assert_eq!(repo.find_all_authors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn filters_books_by_author_in_insertion_order() {
        let repo = seeded();
        let books = repo
            .find_books(&BookFilter::ByAuthor("Robert Martin".into()))
            .await
            .unwrap();
        assert_eq!(
            titles(&books),
            ["Clean Code", "Agile software development"]
        );
    }

    #[tokio::test]
    async fn unknown_author_filter_yields_nothing() {
        let repo = seeded();
        let books = repo
            .find_books(&BookFilter::ByAuthor("Nobody".into()))
            .await
            .unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn genre_filter_matches_genres_contained_in_argument() {
        let repo = seeded();

        let books = repo
            .find_books(&BookFilter::ByGenre("refactoring".into()))
            .await
            .unwrap();
        assert_eq!(
            titles(&books),
            [
                "Clean Code",
                "Refactoring, edition 2",
                "Refactoring to patterns",
                "Practical Object-Oriented Design, An Agile Primer Using Ruby",
            ]
        );

        let books = repo
            .find_books(&BookFilter::ByGenre("classic crime".into()))
            .await
            .unwrap();
        assert_eq!(titles(&books), ["Crime and Punishment", "The Demon"]);
    }

    #[tokio::test]
    async fn all_authors_carry_book_counts_in_order() {
        let repo = seeded();
        let authors = repo.find_all_authors().await.unwrap();
        let counts: Vec<(&str, usize)> = authors
            .iter()
            .map(|a| (a.author().name(), a.book_count()))
            .collect();
        assert_eq!(
            counts,
            [
                ("Robert Martin", 2),
                ("Martin Fowler", 1),
                ("Fyodor Dostoevsky", 2),
                ("Joshua Kerievsky", 1),
                ("Sandi Metz", 1),
            ]
        );
    }

    #[tokio::test]
    async fn adding_book_by_new_author_creates_author() {
        let repo = seeded();
        let book = repo
            .create_book(&add_book_request("Reijo Mäki"))
            .await
            .unwrap();

        assert_eq!(book.id(), "new-2");
        assert_eq!(book.author_id(), &AuthorId::new("new-1"));
        assert_eq!(repo.count_books().await.unwrap(), 8);
        assert_eq!(repo.find_all_authors().await.unwrap().len(), 6);

        let author = repo.find_author_by_name("Reijo Mäki").await.unwrap().unwrap();
        assert_eq!(author.born(), None);
        assert_eq!(author.id(), book.author_id());
    }

    #[tokio::test]
    async fn adding_book_by_known_author_reuses_author() {
        let repo = seeded();
        let book = repo
            .create_book(&add_book_request("Sandi Metz"))
            .await
            .unwrap();

        assert_eq!(book.id(), "new-1");
        assert_eq!(repo.find_all_authors().await.unwrap().len(), 5);
        let metz = repo.find_author(book.author_id()).await.unwrap().unwrap();
        assert_eq!(metz.name(), "Sandi Metz");
    }

    #[tokio::test]
    async fn update_author_persists_born_by_default() {
        let repo = seeded();
        let req = UpdateAuthorRequest::new("Martin Fowler".into(), 1960);

        let updated = repo.update_author(&req).await.unwrap().unwrap();
        assert_eq!(updated.born(), Some(1960));

        let stored = repo
            .find_author_by_name("Martin Fowler")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.born(), Some(1960));
    }

    #[tokio::test]
    async fn update_author_discard_policy_leaves_store_untouched() {
        let repo = seeded().with_born_policy(BornUpdatePolicy::Discard);
        let req = UpdateAuthorRequest::new("Martin Fowler".into(), 1960);

        let updated = repo.update_author(&req).await.unwrap().unwrap();
        assert_eq!(updated.born(), Some(1960));

        let stored = repo
            .find_author_by_name("Martin Fowler")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.born(), Some(1963));
    }

    #[tokio::test]
    async fn update_unknown_author_returns_none() {
        let repo = seeded();
        let req = UpdateAuthorRequest::new("Nobody".into(), 1900);
        assert!(repo.update_author(&req).await.unwrap().is_none());
    }
}
