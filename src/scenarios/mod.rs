use {
    crate::{
        client::RegistrationClient,
        config::Configuration,
        error::Result,
        expectation::Verdict,
        types::unique_email,
    },
    async_trait::async_trait,
    std::sync::Arc,
};

pub mod duplicate_email;
pub mod invalid_email;
pub mod liveness;
pub mod missing_auth;
pub mod missing_email;
pub mod oversized_fields;
pub mod short_password;
pub mod valid_registration;

/// Everything a scenario may touch. Scenarios share nothing else.
pub struct Context {
    pub config: Configuration,
    pub client: RegistrationClient,
}

impl Context {
    pub fn new(config: Configuration) -> Result<Self> {
        let client = RegistrationClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn unique_email(&self, prefix: &str) -> String {
        unique_email(prefix, &self.config.email_domain)
    }

    pub fn referral_code(&self) -> &str {
        &self.config.referral_code
    }
}

/// One independent check of the registration contract.
///
/// `Ok(Verdict::Failed(..))` means the service answered wrongly; `Err(..)` means the
/// exchange itself broke down (see [`crate::error::Error::is_transport`]).
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn run(&self, ctx: &Context) -> Result<Verdict>;
}

pub fn all() -> Vec<Arc<dyn Scenario>> {
    vec![
        Arc::new(liveness::Liveness),
        Arc::new(valid_registration::ValidRegistration),
        Arc::new(invalid_email::InvalidEmail),
        Arc::new(short_password::ShortPassword),
        Arc::new(missing_auth::MissingAuth),
        Arc::new(missing_email::MissingEmail),
        Arc::new(duplicate_email::DuplicateEmail),
        Arc::new(oversized_fields::OversizedFields),
    ]
}

/// Scenarios whose names appear in `names`, in canonical order.
pub fn named(names: &[&str]) -> Vec<Arc<dyn Scenario>> {
    all()
        .into_iter()
        .filter(|s| names.contains(&s.name()))
        .collect()
}
