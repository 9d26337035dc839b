use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{Expectation, StatusExpectation, Verdict},
        types::{RegistrationRequest, SHORT_PASSWORD},
    },
    async_trait::async_trait,
};

pub struct ShortPassword;

#[async_trait]
impl Scenario for ShortPassword {
    fn name(&self) -> &'static str {
        "short_password"
    }

    fn description(&self) -> &'static str {
        "a password below the minimum length is rejected with 400"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let request = RegistrationRequest::valid(ctx.unique_email("aleksandr"), ctx.referral_code())
            .with_password(SHORT_PASSWORD);
        let response = ctx.client.register(&request, Auth::Basic).await?;
        Ok(Expectation::status(StatusExpectation::Exact(400)).check(&response))
    }
}
