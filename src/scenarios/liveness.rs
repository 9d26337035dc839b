use {
    super::{Context, Scenario},
    crate::{
        error::Result,
        expectation::{Expectation, StatusExpectation, Verdict},
    },
    async_trait::async_trait,
};

/// Any of these proves the route exists and the service is up, even if GET is not allowed.
pub const REACHABLE_STATUSES: &[u16] = &[200, 201, 400, 404, 405];

pub struct Liveness;

#[async_trait]
impl Scenario for Liveness {
    fn name(&self) -> &'static str {
        "liveness"
    }

    fn description(&self) -> &'static str {
        "GET /register answers with a routed status"
    }

    async fn run(&self, ctx: &Context) -> Result<Verdict> {
        let response = ctx.client.probe().await?;
        Ok(Expectation::status(StatusExpectation::OneOf(REACHABLE_STATUSES)).check(&response))
    }
}
