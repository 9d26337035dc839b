use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{BodyExpectation, Expectation, StatusExpectation, Verdict},
        types::RegistrationRequest,
    },
    async_trait::async_trait,
};

pub const EXPECTED: Expectation = Expectation::status(StatusExpectation::OneOf(&[200, 201]))
    .with_body(BodyExpectation::NonEmptyField("login_link"));

pub struct ValidRegistration;

#[async_trait]
impl Scenario for ValidRegistration {
    fn name(&self) -> &'static str {
        "valid_registration"
    }

    fn description(&self) -> &'static str {
        "a well-formed, authenticated registration succeeds with a login link"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let request =
            RegistrationRequest::valid(ctx.unique_email("aleksandr"), ctx.referral_code());
        let response = ctx.client.register(&request, Auth::Basic).await?;
        Ok(EXPECTED.check(&response))
    }
}
