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

pub struct MissingEmail;

#[async_trait]
impl Scenario for MissingEmail {
    fn name(&self) -> &'static str {
        "missing_email"
    }

    fn description(&self) -> &'static str {
        "a payload without the email key is rejected with 400"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        // Every other field stays valid, so the rejection can only be about the email.
        let request = RegistrationRequest::valid("", ctx.referral_code()).without_email();
        let response = ctx.client.register(&request, Auth::Basic).await?;
        Ok(Expectation::status(StatusExpectation::Exact(400)).check(&response))
    }
}
