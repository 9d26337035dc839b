use {
    rand::Rng,
    serde::{Deserialize, Serialize},
};

/// Password shorter than any policy the service could reasonably accept.
pub const SHORT_PASSWORD: &str = "123";
pub const VALID_PASSWORD: &str = "VerySecret123";
pub const INVALID_EMAIL: &str = "wrongemail";
pub const OVERSIZED_LEN: usize = 300;

/// Body of `POST /register`. Fields left as `None` are omitted from the JSON entirely.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "refovod_code", skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RegistrationRequest {
    pub fn valid(email: impl Into<String>, referral_code: impl Into<String>) -> Self {
        Self {
            name: Some("Александр".to_owned()),
            patronymic: Some("Иванович".to_owned()),
            surname: Some("Иванов".to_owned()),
            phone: Some("+79991234567".to_owned()),
            email: Some(email.into()),
            address: Some("г. Санкт-Петербург, ул. Ленина, д. 1".to_owned()),
            referral_code: Some(referral_code.into()),
            password: Some(VALID_PASSWORD.to_owned()),
        }
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Replaces every free-text field (name, patronymic, surname, address) with `value`.
    pub fn with_free_text(mut self, value: &str) -> Self {
        self.name = Some(value.to_owned());
        self.patronymic = Some(value.to_owned());
        self.surname = Some(value.to_owned());
        self.address = Some(value.to_owned());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSuccess {
    pub login_link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFailure {
    pub reason: String,
}

/// `<prefix><8 random digits>@<domain>`, fresh per call so reruns never collide.
pub fn unique_email(prefix: &str, domain: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(10_000_000..100_000_000);
    format!("{prefix}{suffix}@{domain}")
}

pub fn oversized_value() -> String {
    "A".repeat(OVERSIZED_LEN)
}
