use {
    super::{Context, Scenario},
    crate::{
        client::Auth,
        error::Result,
        expectation::{Expectation, StatusExpectation, Verdict},
        log::debug,
        types::RegistrationRequest,
    },
    async_trait::async_trait,
};

pub struct DuplicateEmail;

#[async_trait]
impl Scenario for DuplicateEmail {
    fn name(&self) -> &'static str {
        "duplicate_email"
    }

    fn description(&self) -> &'static str {
        "registering the same email twice rejects the second attempt with 400"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let request =
            RegistrationRequest::valid(ctx.unique_email("existing"), ctx.referral_code());

        // The second call depends on server state created by the first, so it must not be
        // sent until the first has fully completed.
        let first = ctx.client.register(&request, Auth::Basic).await?;
        debug!("duplicate_email setup call returned {}", first.status);

        let second = ctx.client.register(&request, Auth::Basic).await?;
        Ok(Expectation::status(StatusExpectation::Exact(400)).check(&second))
    }
}
