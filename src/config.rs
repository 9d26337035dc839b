use {
    crate::error::{Error, Result},
    serde::Deserialize,
    std::time::Duration,
    url::Url,
};

const ENV_PREFIX: &str = "CONFORMANCE_";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub auth_username: String,
    pub auth_password: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_referral_code")]
    pub referral_code: String,
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Configuration {
    pub fn new() -> Result<Configuration> {
        let config = envy::prefixed(ENV_PREFIX).from_env::<Configuration>()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from explicit `CONFORMANCE_*` pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Configuration>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX).from_iter::<_, Configuration>(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn register_url(&self) -> Result<Url> {
        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        Ok(Url::parse(&base)?.join("register")?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "base url must be http(s), got \"{}\"",
                url.scheme()
            )));
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(Error::InvalidConfig(format!(
                "request timeout must be between 1 and 300 seconds, got {}",
                self.request_timeout_secs
            )));
        }
        if self.email_domain.is_empty() || self.email_domain.contains('@') {
            return Err(Error::InvalidConfig(format!(
                "invalid email domain \"{}\"",
                self.email_domain
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://go.dev-01.ru/api/v1/account".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_referral_code() -> String {
    "334".to_owned()
}

fn default_email_domain() -> String {
    "mail.ru".to_owned()
}

fn default_parallel() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}
