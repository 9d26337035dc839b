use {
    crate::{
        config::Configuration,
        error::{Error, Result},
        log::info,
        types::RegistrationRequest,
    },
    reqwest::StatusCode,
    serde::de::DeserializeOwned,
    serde_json::Value,
    std::time::Duration,
    url::Url,
};

/// Whether a request carries the configured basic-auth credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Basic,
    None,
}

/// Status and raw body of a response, kept verbatim for diagnostics.
#[derive(Debug, Clone)]
pub struct ObservedResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ObservedResponse {
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// True when the body is a JSON object with `field` present. Non-JSON bodies never match.
    pub fn has_field(&self, field: &str) -> bool {
        self.json()
            .ok()
            .and_then(|v| v.as_object().map(|o| o.contains_key(field)))
            .unwrap_or(false)
    }

    pub fn string_field(&self, field: &str) -> Option<String> {
        self.json()
            .ok()?
            .get(field)?
            .as_str()
            .map(ToOwned::to_owned)
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    register_url: Url,
    username: String,
    password: String,
    timeout: Duration,
}

impl RegistrationClient {
    pub fn new(config: &Configuration) -> Result<Self> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            register_url: config.register_url()?,
            username: config.auth_username.clone(),
            password: config.auth_password.clone(),
            timeout,
        })
    }

    pub fn register_url(&self) -> &Url {
        &self.register_url
    }

    /// `GET /register` without credentials, only to see that the route answers.
    pub async fn probe(&self) -> Result<ObservedResponse> {
        let request = self.http.get(self.register_url.clone());
        self.execute("GET", request).await
    }

    pub async fn register(
        &self,
        body: &RegistrationRequest,
        auth: Auth,
    ) -> Result<ObservedResponse> {
        let mut request = self.http.post(self.register_url.clone()).json(body);
        if auth == Auth::Basic {
            request = request.basic_auth(&self.username, Some(&self.password));
        }
        self.execute("POST", request).await
    }

    async fn execute(
        &self,
        method: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ObservedResponse> {
        let url = self.register_url.as_str();
        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(url, self.timeout, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(url, self.timeout, e))?;

        info!(
            "{} {} responded with {}, body: {}",
            method, url, status, body
        );

        Ok(ObservedResponse { status, body })
    }
}
