//! Submission orchestrator
//!
//! One best-effort attempt per call: send the trimmed payload, persist the
//! record under [`FORM_DATA_KEY`], navigate. No retries.

use crate::error::StorageError;
use crate::form::FormValues;
use crate::ports::{AssignmentPayload, CandidatesApi, KeyValueStore, Navigator};
use crate::record::{SubmittedRecord, FORM_DATA_KEY};

/// Shown when a failure carries no structured error list
pub const GENERIC_SUBMIT_ERROR: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Sent, persisted and navigated away
    Accepted(SubmittedRecord),
    /// Messages to list under the form
    Rejected(Vec<String>),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}

pub struct SubmissionOrchestrator<'a, A: ?Sized, S: ?Sized, N: ?Sized> {
    api: &'a A,
    store: &'a S,
    navigator: &'a N,
}

impl<'a, A, S, N> SubmissionOrchestrator<'a, A, S, N>
where
    A: CandidatesApi + ?Sized,
    S: KeyValueStore + ?Sized,
    N: Navigator + ?Sized,
{
    pub fn new(api: &'a A, store: &'a S, navigator: &'a N) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    pub async fn submit(&self, values: &FormValues) -> SubmissionOutcome {
        let values = values.trimmed();
        let payload = AssignmentPayload::from(&values);

        if let Err(e) = self.api.submit_assignment(&payload).await {
            tracing::warn!("assignment submission rejected: {}", e);
            let messages = match e.server_messages() {
                Some(messages) => messages.to_vec(),
                None => vec![GENERIC_SUBMIT_ERROR.to_string()],
            };
            return SubmissionOutcome::Rejected(messages);
        }

        let record = SubmittedRecord::from(&values);
        let persisted = record
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(FORM_DATA_KEY, &json));
        if let Err(e) = persisted {
            tracing::error!("failed to persist submitted record: {}", e);
            return SubmissionOutcome::Rejected(vec![GENERIC_SUBMIT_ERROR.to_string()]);
        }

        tracing::info!(level = %record.level, "assignment submitted");
        self.navigator.to_confirmation();
        SubmissionOutcome::Accepted(record)
    }
}
