use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    name: String,
    phone: Option<String>,
    street: String,
    city: String,
}

impl Person {
    pub const fn new(
        id: String,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            street,
            city,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// An empty phone number counts as no phone number.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|phone| !phone.is_empty())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Derived from street and city on every call; never stored.
    pub fn address(&self) -> Address {
        Address::new(self.street.clone(), self.city.clone())
    }

    #[must_use]
    pub fn with_phone(self, phone: String) -> Self {
        Self {
            phone: Some(phone),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    city: String,
}

impl Address {
    pub const fn new(street: String, city: String) -> Self {
        Self { street, city }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFilter {
    WithPhone,
    WithoutPhone,
}

impl PhoneFilter {
    pub fn matches(self, person: &Person) -> bool {
        match self {
            Self::WithPhone => person.has_phone(),
            Self::WithoutPhone => !person.has_phone(),
        }
    }
}

#[derive(Debug)]
pub struct CreatePersonRequest {
    name: String,
    phone: Option<String>,
    street: String,
    city: String,
}

impl CreatePersonRequest {
    pub const fn new(name: String, phone: Option<String>, street: String, city: String) -> Self {
        Self {
            name,
            phone,
            street,
            city,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Error, Debug)]
pub enum CreatePersonError {
    #[error("Person with name \"{name}\" already exists")]
    Duplicate { name: String },
    #[error(transparent)]
    Other(anyhow::Error),
}

#[derive(Debug)]
pub struct UpdatePhoneRequest {
    name: String,
    phone: String,
}

impl UpdatePhoneRequest {
    pub const fn new(name: String, phone: String) -> Self {
        Self { name, phone }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct UpdatePhoneError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FindPersonError(#[from] pub anyhow::Error);

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FindPersonsError(#[from] pub anyhow::Error);

#[cfg(test)]
mod tests {
    use super::*;

    fn person(phone: Option<&str>) -> Person {
        Person::new(
            "p-1".into(),
            "Venla Ruuska".into(),
            phone.map(str::to_string),
            "Nallemäentie 22 C".into(),
            "Helsinki".into(),
        )
    }

    #[test]
    fn empty_phone_is_no_phone() {
        assert!(!person(None).has_phone());
        assert!(!person(Some("")).has_phone());
        assert!(person(Some("040-1")).has_phone());
    }

    #[test]
    fn phone_filter_splits_on_presence() {
        assert!(PhoneFilter::WithPhone.matches(&person(Some("040-1"))));
        assert!(PhoneFilter::WithoutPhone.matches(&person(Some(""))));
        assert!(!PhoneFilter::WithoutPhone.matches(&person(Some("040-1"))));
    }

    #[test]
    fn address_is_built_from_street_and_city() {
        let address = person(None).address();
        assert_eq!(address.street(), "Nallemäentie 22 C");
        assert_eq!(address.city(), "Helsinki");
    }
}
