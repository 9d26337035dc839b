use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{Expectation, StatusExpectation, Verdict},
        types::RegistrationRequest,
    },
    async_trait::async_trait,
};

pub struct MissingAuth;

#[async_trait]
impl Scenario for MissingAuth {
    fn name(&self) -> &'static str {
        "missing_auth"
    }

    fn description(&self) -> &'static str {
        "a registration without basic auth is rejected"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        // A payload the service would accept with credentials, so only auth can reject it.
        let request = RegistrationRequest::valid(ctx.unique_email("noauth"), ctx.referral_code());
        let response = ctx.client.register(&request, Auth::None).await?;
        // 400, 401 and 403 are all seen in the wild; only rejection is required.
        Ok(Expectation::status(StatusExpectation::AtLeast(400)).check(&response))
    }
}
