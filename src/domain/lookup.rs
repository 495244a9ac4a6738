/// Status reported by the external lookup service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupStatus {
    Success,
    /// Any status other than success, carried as reported.
    Other(String),
}

impl From<&str> for LookupStatus {
    fn from(status: &str) -> Self {
        match status {
            "success" => LookupStatus::Success,
            other => LookupStatus::Other(other.to_string()),
        }
    }
}

/// Answer from a single lookup call. Produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub status: LookupStatus,
    pub payload: f64,
}

impl LookupResult {
    pub fn new(status: impl Into<LookupStatus>, payload: f64) -> Self {
        Self {
            status: status.into(),
            payload,
        }
    }

    pub fn success(payload: f64) -> Self {
        Self::new(LookupStatus::Success, payload)
    }

    pub fn is_success(&self) -> bool {
        self.status == LookupStatus::Success
    }
}
