use {
    self::server::{Behaviour, StubServer, PASSWORD, USERNAME},
    async_trait::async_trait,
    registration_conformance::{
        log::Logger,
        scenarios::Context,
        Configuration,
    },
    std::sync::OnceLock,
    test_context::AsyncTestContext,
};

pub mod server;

// One subscriber for the whole test binary; a per-test guard would stop the writer for
// every other test still running.
static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn config_for(base_url: &str, timeout_secs: u64) -> Configuration {
    Configuration::from_vars(vec![
        ("CONFORMANCE_BASE_URL".to_owned(), base_url.to_owned()),
        ("CONFORMANCE_AUTH_USERNAME".to_owned(), USERNAME.to_owned()),
        ("CONFORMANCE_AUTH_PASSWORD".to_owned(), PASSWORD.to_owned()),
        (
            "CONFORMANCE_REQUEST_TIMEOUT_SECS".to_owned(),
            timeout_secs.to_string(),
        ),
        ("CONFORMANCE_EMAIL_DOMAIN".to_owned(), "example.com".to_owned()),
    ])
    .expect("Invalid test configuration")
}

/// A conforming stub service plus a harness context pointed at it.
pub struct StubContext {
    pub server: StubServer,
    pub harness: Context,
}

#[async_trait]
impl AsyncTestContext for StubContext {
    async fn setup() -> Self {
        LOGGER.get_or_init(|| Logger::init("debug").expect("Failed to start logging"));
        let server = StubServer::start(Behaviour::Conforming).await;
        let harness = Context::new(config_for(&server.base_url(), 5)).unwrap();

        Self { server, harness }
    }

    async fn teardown(self) {
        self.server.shutdown().await;
    }
}
