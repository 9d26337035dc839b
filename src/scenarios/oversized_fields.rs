use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{Expectation, StatusExpectation, Verdict},
        types::{oversized_value, RegistrationRequest},
    },
    async_trait::async_trait,
};

pub struct OversizedFields;

#[async_trait]
impl Scenario for OversizedFields {
    fn name(&self) -> &'static str {
        "oversized_fields"
    }

    fn description(&self) -> &'static str {
        "300-character name, patronymic, surname and address are rejected"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let request = RegistrationRequest::valid(ctx.unique_email("long"), ctx.referral_code())
            .with_free_text(&oversized_value());
        let response = ctx.client.register(&request, Auth::Basic).await?;
        Ok(Expectation::status(StatusExpectation::AtLeast(400)).check(&response))
    }
}
