use {
    crate::{
        error::{Error, Result},
        expectation::{Mismatch, Verdict},
    },
    chrono::{DateTime, Utc},
    serde::Serialize,
    uuid::Uuid,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    /// The service answered, but not as the contract requires.
    Failed(Mismatch),
    /// No usable answer at all: the service is down, slow or garbled.
    Errored { kind: String, message: String },
}

impl Outcome {
    pub fn from_result(result: Result<Verdict>) -> Self {
        match result {
            Ok(Verdict::Passed) => Outcome::Passed,
            Ok(Verdict::Failed(mismatch)) => Outcome::Failed(mismatch),
            Err(err) => Outcome::errored(&err),
        }
    }

    fn errored(err: &Error) -> Self {
        Outcome::Errored {
            kind: err.kind().to_owned(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub run_id: Uuid,
    pub target: String,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    #[serde(skip)]
    pub reports: Vec<ScenarioReport>,
}

impl Summary {
    pub fn new(run_id: Uuid, target: String, reports: Vec<ScenarioReport>) -> Self {
        let count = |pred: fn(&Outcome) -> bool| reports.iter().filter(|r| pred(&r.outcome)).count();
        let passed = count(|o| matches!(o, Outcome::Passed));
        let failed = count(|o| matches!(o, Outcome::Failed(_)));
        let errored = count(|o| matches!(o, Outcome::Errored { .. }));

        Self {
            run_id,
            target,
            passed,
            failed,
            errored,
            reports,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    pub fn report(&self, scenario: &str) -> Option<&ScenarioReport> {
        self.reports.iter().find(|r| r.scenario == scenario)
    }

    /// One JSON line per scenario followed by the summary line.
    pub fn to_json_lines(&self) -> Result<Vec<String>> {
        let mut lines = self
            .reports
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        lines.push(serde_json::to_string(self)?);
        Ok(lines)
    }
}
