//! src/sink.rs
//! ============================================================================
//! # Submission Sink
//!
//! The completed [`RegistrationRecord`] must be emitted to some external
//! sink exactly once per successful submission. The sink's concrete nature
//! (API call, queue, log) is left to the surrounding application; the
//! shipped implementation writes the record as a JSON line through
//! `tracing`.

use tracing::info;

use crate::error::AppError;
use crate::model::registration::RegistrationRecord;

/// External collaborator that receives each completed registration.
pub trait SubmissionSink: Send + Sync {
    fn emit(&self, record: &RegistrationRecord) -> Result<(), AppError>;
}

/// Diagnostic-log sink: serializes the record and emits it at info level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn emit(&self, record: &RegistrationRecord) -> Result<(), AppError> {
        let json = serde_json::to_string(record)?;
        info!(
            target: "regform::submission",
            record_id = %record.id,
            vehicles = record.vehicles.len(),
            %json,
            "registration submitted"
        );
        Ok(())
    }
}
