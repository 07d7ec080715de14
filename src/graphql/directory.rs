use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Enum, ErrorExtensions, ID, Object, Schema, SimpleObject,
};

use super::internal_error;
use crate::models::directory::{
    Address, CreatePersonRequest, Person, PhoneFilter, UpdatePhoneRequest,
};
use crate::repositories::DirectoryRepository;

pub type DirectorySchema = Schema<DirectoryQuery, DirectoryMutation, EmptySubscription>;

type SharedDirectory = Arc<dyn DirectoryRepository>;

pub fn directory_schema(repo: impl DirectoryRepository) -> DirectorySchema {
    let repo: SharedDirectory = Arc::new(repo);
    Schema::build(DirectoryQuery, DirectoryMutation, EmptySubscription)
        .data(repo)
        .finish()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedDirectory> {
    ctx.data::<SharedDirectory>()
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for PhoneFilter {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::Yes => PhoneFilter::WithPhone,
            YesNo::No => PhoneFilter::WithoutPhone,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Address")]
pub struct AddressObject {
    street: String,
    city: String,
}

impl From<Address> for AddressObject {
    fn from(value: Address) -> Self {
        Self {
            street: value.street().to_string(),
            city: value.city().to_string(),
        }
    }
}

pub struct PersonObject(Person);

#[Object(name = "Person")]
impl PersonObject {
    async fn name(&self) -> &str {
        self.0.name()
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone()
    }

    async fn address(&self) -> AddressObject {
        self.0.address().into()
    }

    async fn id(&self) -> ID {
        ID::from(self.0.id())
    }
}

impl From<Person> for PersonObject {
    fn from(person: Person) -> Self {
        Self(person)
    }
}

pub struct DirectoryQuery;

#[Object(name = "Query")]
impl DirectoryQuery {
    async fn person_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let repo = get_repo(ctx)?;
        repo.count_persons().await.map_err(internal_error)
    }

    /// All persons, optionally only those with (`YES`) or without (`NO`) a phone number.
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        phone: Option<YesNo>,
    ) -> async_graphql::Result<Vec<PersonObject>> {
        let repo = get_repo(ctx)?;
        let persons = repo
            .find_persons(phone.map(PhoneFilter::from))
            .await
            .map_err(internal_error)?;
        Ok(persons.into_iter().map(PersonObject::from).collect())
    }

    async fn find_person(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<PersonObject>> {
        let repo = get_repo(ctx)?;
        let person = repo.find_person(&name).await.map_err(internal_error)?;
        Ok(person.map(PersonObject::from))
    }
}

pub struct DirectoryMutation;

#[Object(name = "Mutation")]
impl DirectoryMutation {
    /// Add a person. Fails with `BAD_USER_INPUT` when the name is taken.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> async_graphql::Result<Option<PersonObject>> {
        let repo = get_repo(ctx)?;
        let req = CreatePersonRequest::new(name, phone, street, city);
        let person = repo.create_person(&req).await.map_err(|err| err.extend())?;
        Ok(Some(person.into()))
    }

    /// Replace a person's phone number. Returns null for an unknown name.
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> async_graphql::Result<Option<PersonObject>> {
        let repo = get_repo(ctx)?;
        let req = UpdatePhoneRequest::new(name, phone);
        let person = repo.update_phone(&req).await.map_err(internal_error)?;
        Ok(person.map(PersonObject::from))
    }
}
