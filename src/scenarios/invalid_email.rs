use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{BodyExpectation, Expectation, StatusExpectation, Verdict},
        types::{RegistrationRequest, INVALID_EMAIL},
    },
    async_trait::async_trait,
};

pub struct InvalidEmail;

#[async_trait]
impl Scenario for InvalidEmail {
    fn name(&self) -> &'static str {
        "invalid_email"
    }

    fn description(&self) -> &'static str {
        "a malformed email is rejected with 400 and a reason"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let request = RegistrationRequest::valid(INVALID_EMAIL, ctx.referral_code());
        let response = ctx.client.register(&request, Auth::Basic).await?;
        Ok(Expectation::status(StatusExpectation::Exact(400))
            .with_body(BodyExpectation::Field("reason"))
            .check(&response))
    }
}
