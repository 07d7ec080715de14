use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
    born: Option<i32>,
}

impl Author {
    pub const fn new(id: AuthorId, name: String, born: Option<i32>) -> Self {
        Self { id, name, born }
    }

    pub const fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn born(&self) -> Option<i32> {
        self.born
    }

    #[must_use]
    pub fn with_born(self, born: i32) -> Self {
        Self {
            born: Some(born),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: String,
    title: String,
    published: i32,
    author_id: AuthorId,
    genres: Vec<String>,
}

impl Book {
    pub const fn new(
        id: String,
        title: String,
        published: i32,
        author_id: AuthorId,
        genres: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            published,
            author_id,
            genres,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn published(&self) -> i32 {
        self.published
    }

    pub const fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub const fn genres(&self) -> &Vec<String> {
        &self.genres
    }

    /// Reports whether any of this book's genres occurs inside `arg`.
    ///
    /// The containment runs from genre into argument, so `"refactoring, design"`
    /// matches a book tagged `design` and `"art"` matches nothing tagged `"arts"`.
    pub fn genre_occurs_in(&self, arg: &str) -> bool {
        self.genres.iter().any(|genre| arg.contains(genre.as_str()))
    }
}

/// An author together with the number of books that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithBookCount {
    author: Author,
    book_count: usize,
}

impl AuthorWithBookCount {
    pub const fn new(author: Author, book_count: usize) -> Self {
        Self { author, book_count }
    }

    pub const fn author(&self) -> &Author {
        &self.author
    }

    pub const fn book_count(&self) -> usize {
        self.book_count
    }
}

/// Which books a listing returns. Only one filter ever applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    ByAuthor(String),
    ByGenre(String),
}

impl BookFilter {
    /// Picks the filter from optional listing arguments.
    ///
    /// Empty strings count as absent, and `author` wins over `genre`.
    pub fn from_args(author: Option<String>, genre: Option<String>) -> Self {
        match (author, genre) {
            (Some(author), _) if !author.is_empty() => Self::ByAuthor(author),
            (_, Some(genre)) if !genre.is_empty() => Self::ByGenre(genre),
            _ => Self::All,
        }
    }
}

#[derive(Debug)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    published: i32,
    genres: Vec<String>,
}

impl CreateBookRequest {
    pub const fn new(title: String, author: String, published: i32, genres: Vec<String>) -> Self {
        Self {
            title,
            author,
            published,
            genres,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the author; an unknown name creates a new author.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub const fn published(&self) -> i32 {
        self.published
    }

    pub const fn genres(&self) -> &Vec<String> {
        &self.genres
    }
}

#[derive(Debug)]
pub struct UpdateAuthorRequest {
    name: String,
    born: i32,
}

impl UpdateAuthorRequest {
    pub const fn new(name: String, born: i32) -> Self {
        Self { name, born }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn born(&self) -> i32 {
        self.born
    }
}

/// What an author update does to stored state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BornUpdatePolicy {
    /// Store the new birth year.
    #[default]
    Persist,
    /// Return the updated author but leave the stored author untouched.
    ///
    /// Kept for clients that rely on the legacy catalog, where edits never stuck.
    Discard,
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FindBooksError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FindAuthorError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FindAllAuthorsError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct CreateBookError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct UpdateAuthorError(#[from] pub anyhow::Error);
