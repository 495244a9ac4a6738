use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ExternalLookup;
use crate::domain::LookupResult;
use crate::error::LookupError;

/// Lookup backed by a fixed table of answers.
///
/// Ids missing from the table fail the call the way an unreachable service
/// would.
#[derive(Debug, Clone, Default)]
pub struct TableLookup {
    answers: HashMap<String, LookupResult>,
}

impl TableLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, order_id: impl Into<String>, result: LookupResult) -> Self {
        self.answers.insert(order_id.into(), result);
        self
    }
}

#[async_trait]
impl ExternalLookup for TableLookup {
    #[instrument(skip(self))]
    async fn call(&self, order_id: &str) -> Result<LookupResult, LookupError> {
        debug!("Sending request");
        self.answers
            .get(order_id)
            .cloned()
            .ok_or_else(|| LookupError::Unavailable(format!("no answer for order {}", order_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_and_unknown_ids() {
        let lookup = TableLookup::new().with_answer("7", LookupResult::success(60.0));

        assert_eq!(lookup.call("7").await, Ok(LookupResult::success(60.0)));
        assert!(matches!(lookup.call("8").await, Err(LookupError::Unavailable(_))));
    }
}
