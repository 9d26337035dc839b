use {
    crate::client::ObservedResponse,
    serde::Serialize,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusExpectation {
    Exact(u16),
    OneOf(&'static [u16]),
    AtLeast(u16),
}

impl StatusExpectation {
    pub fn matches(&self, status: u16) -> bool {
        match self {
            StatusExpectation::Exact(code) => status == *code,
            StatusExpectation::OneOf(codes) => codes.contains(&status),
            StatusExpectation::AtLeast(code) => status >= *code,
        }
    }
}

impl fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusExpectation::Exact(code) => write!(f, "{code}"),
            StatusExpectation::OneOf(codes) => {
                let codes = codes
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "one of [{codes}]")
            }
            StatusExpectation::AtLeast(code) => write!(f, ">= {code}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyExpectation {
    Any,
    Field(&'static str),
    NonEmptyField(&'static str),
}

impl BodyExpectation {
    pub fn matches(&self, response: &ObservedResponse) -> bool {
        match self {
            BodyExpectation::Any => true,
            BodyExpectation::Field(field) => response.has_field(field),
            BodyExpectation::NonEmptyField(field) => response
                .string_field(field)
                .map_or(false, |value| !value.trim().is_empty()),
        }
    }
}

impl fmt::Display for BodyExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyExpectation::Any => write!(f, "any body"),
            BodyExpectation::Field(field) => write!(f, "body with \"{field}\""),
            BodyExpectation::NonEmptyField(field) => {
                write!(f, "body with non-empty \"{field}\"")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub status: StatusExpectation,
    pub body: BodyExpectation,
}

impl Expectation {
    pub const fn status(status: StatusExpectation) -> Self {
        Self {
            status,
            body: BodyExpectation::Any,
        }
    }

    pub const fn with_body(mut self, body: BodyExpectation) -> Self {
        self.body = body;
        self
    }

    pub fn check(&self, response: &ObservedResponse) -> Verdict {
        let status = response.status.as_u16();
        if self.status.matches(status) && self.body.matches(response) {
            Verdict::Passed
        } else {
            Verdict::Failed(Mismatch {
                expected: self.to_string(),
                status,
                body: response.body.clone(),
            })
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            BodyExpectation::Any => write!(f, "status {}", self.status),
            body => write!(f, "status {} and {}", self.status, body),
        }
    }
}

/// What the service answered when it did not answer as expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub expected: String,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(Mismatch),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}
