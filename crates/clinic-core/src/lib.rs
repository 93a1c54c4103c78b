//! Clinical record repository and referral workflow.
//!
//! - [`Repository`]: one ordered in-memory [`Collection`] per entity
//! - [`load_all`]: runs every entity loader against a source directory
//! - [`ReferralWorkflow`]: referral queue plus email and EHR audit logs
//! - [`Clinic`]: composition root wiring the repository to a shared workflow

pub mod clinic;
pub mod error;
pub mod pipeline;
pub mod referral;
pub mod repository;

pub use clinic::Clinic;
pub use error::{CoreError, Result};
pub use pipeline::{EntityLoad, LoadReport, LoadStatus, load_all};
pub use referral::{
    Clock, ReferralWorkflow, SharedReferral, WorkflowHandle, render_ehr_update, render_email,
    render_referral_document,
};
pub use repository::{Collection, Holds, Placement, Repository};
