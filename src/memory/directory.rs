use crate::ids::IdGenerator;
use crate::models::directory::{
    CreatePersonError, CreatePersonRequest, FindPersonError, FindPersonsError, Person,
    PhoneFilter, UpdatePhoneError, UpdatePhoneRequest,
};
use crate::repositories::DirectoryRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MemoryDirectoryRepository {
    persons: Arc<RwLock<Vec<Person>>>,
    ids: Box<dyn IdGenerator>,
}

impl MemoryDirectoryRepository {
    pub fn new(ids: impl IdGenerator) -> Self {
        Self::with_data(Vec::new(), ids)
    }

    pub fn with_data(persons: Vec<Person>, ids: impl IdGenerator) -> Self {
        Self {
            persons: Arc::new(RwLock::new(persons)),
            ids: Box::new(ids),
        }
    }
}

#[async_trait]
impl DirectoryRepository for MemoryDirectoryRepository {
    async fn count_persons(&self) -> Result<usize, FindPersonsError> {
        Ok(self.persons.read().await.len())
    }

    async fn find_persons(
        &self,
        filter: Option<PhoneFilter>,
    ) -> Result<Vec<Person>, FindPersonsError> {
        let persons = self.persons.read().await;
        let matched = persons
            .iter()
            .filter(|person| filter.is_none_or(|filter| filter.matches(person)))
            .cloned()
            .collect();

        Ok(matched)
    }

    async fn find_person(&self, name: &str) -> Result<Option<Person>, FindPersonError> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|person| person.name() == name).cloned())
    }

    async fn create_person(&self, req: &CreatePersonRequest) -> Result<Person, CreatePersonError> {
        let mut persons = self.persons.write().await;

        if persons.iter().any(|person| person.name() == req.name()) {
            tracing::warn!(name = req.name(), "rejected duplicate person");
            return Err(CreatePersonError::Duplicate {
                name: req.name().to_string(),
            });
        }

        let person = Person::new(
            self.ids.generate(),
            req.name().to_string(),
            req.phone().map(str::to_string),
            req.street().to_string(),
            req.city().to_string(),
        );
        persons.push(person.clone());
        tracing::info!(name = person.name(), id = person.id(), "person added");

        Ok(person)
    }

    async fn update_phone(
        &self,
        req: &UpdatePhoneRequest,
    ) -> Result<Option<Person>, UpdatePhoneError> {
        let mut persons = self.persons.write().await;

        let Some(stored) = persons.iter_mut().find(|person| person.name() == req.name()) else {
            return Ok(None);
        };
        let updated = stored.clone().with_phone(req.phone().to_string());
        *stored = updated.clone();
        tracing::info!(name = req.name(), "phone number updated");

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::seed;

    fn seeded() -> MemoryDirectoryRepository {
        MemoryDirectoryRepository::with_data(seed::persons(), SequentialIds::new("person"))
    }

    fn names(persons: &[Person]) -> Vec<&str> {
        persons.iter().map(Person::name).collect()
    }

    #[tokio::test]
    async fn filters_by_phone_presence() {
        let repo = seeded();

        let all = repo.find_persons(None).await.unwrap();
        assert_eq!(
            names(&all),
            ["Arto Hellas", "Matti Luukkainen", "Venla Ruuska"]
        );

        let with = repo
            .find_persons(Some(PhoneFilter::WithPhone))
            .await
            .unwrap();
        assert_eq!(names(&with), ["Arto Hellas", "Matti Luukkainen"]);

        let without = repo
            .find_persons(Some(PhoneFilter::WithoutPhone))
            .await
            .unwrap();
        assert_eq!(names(&without), ["Venla Ruuska"]);
    }

    #[tokio::test]
    async fn finds_person_by_exact_name() {
        let repo = seeded();
        let person = repo.find_person("Arto Hellas").await.unwrap().unwrap();
        assert_eq!(person.phone(), Some("040-123543"));
        assert!(repo.find_person("arto hellas").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn creates_person_with_fresh_id() {
        let repo = MemoryDirectoryRepository::new(SequentialIds::new("person"));
        let req = CreatePersonRequest::new(
            "Kalle Ilves".into(),
            None,
            "Kuninkaankatu 1".into(),
            "Tampere".into(),
        );

        let person = repo.create_person(&req).await.unwrap();
        assert_eq!(person.id(), "person-1");
        assert_eq!(person.phone(), None);
        assert_eq!(repo.count_persons().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_name_without_mutating() {
        let repo = seeded();
        let req = CreatePersonRequest::new(
            "Venla Ruuska".into(),
            Some("050-1".into()),
            "Elsewhere 1".into(),
            "Turku".into(),
        );

        let err = repo.create_person(&req).await.unwrap_err();
        assert!(matches!(err, CreatePersonError::Duplicate { ref name } if name == "Venla Ruuska"));
        assert_eq!(repo.count_persons().await.unwrap(), 3);
        let venla = repo.find_person("Venla Ruuska").await.unwrap().unwrap();
        assert_eq!(venla.city(), "Helsinki");
    }

    #[tokio::test]
    async fn update_phone_keeps_other_fields() {
        let repo = seeded();
        let before = repo.find_person("Venla Ruuska").await.unwrap().unwrap();

        let req = UpdatePhoneRequest::new("Venla Ruuska".into(), "045-999".into());
        let updated = repo.update_phone(&req).await.unwrap().unwrap();

        assert_eq!(updated.phone(), Some("045-999"));
        assert_eq!(updated.street(), before.street());
        assert_eq!(updated.city(), before.city());
        assert_eq!(updated.id(), before.id());

        let stored = repo.find_person("Venla Ruuska").await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_phone_for_unknown_name_changes_nothing() {
        let repo = seeded();
        let before = repo.find_persons(None).await.unwrap();

        let req = UpdatePhoneRequest::new("Nobody".into(), "000".into());
        assert!(repo.update_phone(&req).await.unwrap().is_none());
        assert_eq!(repo.find_persons(None).await.unwrap(), before);
    }
}
