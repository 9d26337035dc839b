use {
    crate::{
        log::{info, warn},
        report::{Outcome, ScenarioReport, Summary},
        scenarios::{Context, Scenario},
    },
    chrono::Utc,
    futures::future,
    std::{
        sync::Arc,
        time::{Duration, Instant},
    },
    tracing::Instrument,
    uuid::Uuid,
};
pub use {
    config::Configuration,
    error::{Error, Result},
};

pub mod client;
pub mod config;
pub mod error;
pub mod expectation;
pub mod log;
pub mod report;
pub mod scenarios;
pub mod types;

/// Runs every scenario against the configured service.
pub async fn bootstrap(config: Configuration) -> Result<Summary> {
    let parallel = config.parallel;
    let ctx = Context::new(config)?;
    Ok(run(&ctx, scenarios::all(), parallel).await)
}

/// Runs `scenarios` and collects one report each. A failing or erroring scenario never
/// stops the others.
pub async fn run(ctx: &Context, scenarios: Vec<Arc<dyn Scenario>>, parallel: bool) -> Summary {
    let run_id = Uuid::new_v4();
    let target = ctx.client.register_url().to_string();
    info!(
        "Starting run {} with {} scenarios against {}",
        run_id,
        scenarios.len(),
        target
    );

    let reports = if parallel {
        future::join_all(scenarios.iter().map(|s| run_one(ctx, s.as_ref()))).await
    } else {
        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            reports.push(run_one(ctx, scenario.as_ref()).await);
        }
        reports
    };

    let summary = Summary::new(run_id, target, reports);
    info!(
        "Run {} finished: {} passed, {} failed, {} errored",
        run_id, summary.passed, summary.failed, summary.errored
    );
    summary
}

async fn run_one(ctx: &Context, scenario: &dyn Scenario) -> ScenarioReport {
    let started_at = Utc::now();
    let timer = Instant::now();
    let span = tracing::info_span!("scenario", name = scenario.name());

    let outcome = Outcome::from_result(scenario.run(ctx).instrument(span).await);
    match &outcome {
        Outcome::Passed => info!("{}: passed", scenario.name()),
        Outcome::Failed(mismatch) => warn!(
            "{}: expected {}, got {} with body {}",
            scenario.name(),
            mismatch.expected,
            mismatch.status,
            mismatch.body
        ),
        Outcome::Errored { kind, message } => {
            warn!("{}: {} error: {}", scenario.name(), kind, message)
        }
    }

    ScenarioReport {
        scenario: scenario.name(),
        description: scenario.description(),
        outcome,
        started_at,
        elapsed_ms: elapsed_ms(timer.elapsed()),
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_saturates() {
        assert_eq!(elapsed_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
