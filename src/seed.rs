//! Records both services start with.

use crate::models::catalog::{Author, AuthorId, Book};
use crate::models::directory::Person;

const ROBERT_MARTIN: &str = "afa51ab0-344d-11e9-a414-719c6709cf3e";
const MARTIN_FOWLER: &str = "afa5b6f0-344d-11e9-a414-719c6709cf3e";
const FYODOR_DOSTOEVSKY: &str = "afa5b6f1-344d-11e9-a414-719c6709cf3e";
const JOSHUA_KERIEVSKY: &str = "afa5b6f2-344d-11e9-a414-719c6709cf3e";
const SANDI_METZ: &str = "afa5b6f3-344d-11e9-a414-719c6709cf3e";

pub fn catalog() -> (Vec<Author>, Vec<Book>) {
    let authors = vec![
        author(ROBERT_MARTIN, "Robert Martin", Some(1952)),
        author(MARTIN_FOWLER, "Martin Fowler", Some(1963)),
        author(FYODOR_DOSTOEVSKY, "Fyodor Dostoevsky", Some(1821)),
        author(JOSHUA_KERIEVSKY, "Joshua Kerievsky", None),
        author(SANDI_METZ, "Sandi Metz", None),
    ];

    let books = vec![
        book(
            "afa5b6f4-344d-11e9-a414-719c6709cf3e",
            "Clean Code",
            2008,
            ROBERT_MARTIN,
            &["refactoring"],
        ),
        book(
            "afa5b6f5-344d-11e9-a414-719c6709cf3e",
            "Agile software development",
            2002,
            ROBERT_MARTIN,
            &["agile", "patterns", "design"],
        ),
        book(
            "afa5de00-344d-11e9-a414-719c6709cf3e",
            "Refactoring, edition 2",
            2018,
            MARTIN_FOWLER,
            &["refactoring"],
        ),
        book(
            "afa5de01-344d-11e9-a414-719c6709cf3e",
            "Refactoring to patterns",
            2008,
            JOSHUA_KERIEVSKY,
            &["refactoring", "patterns"],
        ),
        book(
            "afa5de02-344d-11e9-a414-719c6709cf3e",
            "Practical Object-Oriented Design, An Agile Primer Using Ruby",
            2012,
            SANDI_METZ,
            &["refactoring", "design"],
        ),
        book(
            "afa5de03-344d-11e9-a414-719c6709cf3e",
            "Crime and Punishment",
            1866,
            FYODOR_DOSTOEVSKY,
            &["classic", "crime"],
        ),
        book(
            "afa5de04-344d-11e9-a414-719c6709cf3e",
            "The Demon",
            1872,
            FYODOR_DOSTOEVSKY,
            &["classic", "revolution"],
        ),
    ];

    (authors, books)
}

pub fn persons() -> Vec<Person> {
    vec![
        person(
            "3d594650-3436-11e9-bc57-8b80ba54c431",
            "Arto Hellas",
            Some("040-123543"),
            "Tapiolankatu 5 A",
            "Espoo",
        ),
        person(
            "3d599470-3436-11e9-bc57-8b80ba54c431",
            "Matti Luukkainen",
            Some("040-432342"),
            "Malminkaari 10 A",
            "Helsinki",
        ),
        person(
            "3d599471-3436-11e9-bc57-8b80ba54c431",
            "Venla Ruuska",
            None,
            "Nallemäentie 22 C",
            "Helsinki",
        ),
    ]
}

fn author(id: &str, name: &str, born: Option<i32>) -> Author {
    Author::new(AuthorId::new(id), name.into(), born)
}

fn book(id: &str, title: &str, published: i32, author_id: &str, genres: &[&str]) -> Book {
    Book::new(
        id.into(),
        title.into(),
        published,
        AuthorId::new(author_id),
        genres.iter().map(|genre| genre.to_string()).collect(),
    )
}

fn person(id: &str, name: &str, phone: Option<&str>, street: &str, city: &str) -> Person {
    Person::new(
        id.into(),
        name.into(),
        phone.map(str::to_string),
        street.into(),
        city.into(),
    )
}
