//! # Portal Core
//!
//! Domain logic for the assignment submission portal, shared by the native
//! binary and the browser front end.
//!
//! ## Flow
//!
//! - **Validation**: per-field validators (trim, length bounds, email/URL format)
//! - **Form**: values, per-field errors, `dirty`/`valid`/`submitting` flags
//! - **Options**: lazy fetch-once loader for candidate levels
//! - **Submission**: sends the trimmed payload, persists the record, navigates
//! - **Confirmation**: reads the persisted record back for display
//!
//! All I/O happens behind the ports in [`ports`], so the same code runs
//! against reqwest and a JSON file natively, and against gloo-net and
//! `localStorage` in the browser.

pub mod confirmation;
pub mod error;
pub mod field;
pub mod form;
pub mod options;
pub mod ports;
pub mod record;
pub mod storage;
pub mod submission;
pub mod validation;

pub use confirmation::{read_confirmation, ConfirmationView};
pub use error::{ApiError, StorageError};
pub use field::Field;
pub use form::{FieldErrors, FormState, FormValues};
pub use options::{DropdownRow, LevelOption, OptionsLoader, OptionsState};
pub use ports::{AssignmentPayload, CandidatesApi, KeyValueStore, LevelsResponse, Navigator};
pub use record::{SubmittedRecord, FORM_DATA_KEY};
pub use storage::InMemoryStore;
pub use submission::{SubmissionOrchestrator, SubmissionOutcome, GENERIC_SUBMIT_ERROR};
pub use validation::ValidationError;
