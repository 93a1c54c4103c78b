//! Referral workflow: queueing, audit artifacts and document export.

mod render;
mod workflow;

pub use render::{render_ehr_update, render_email, render_referral_document};
pub use workflow::{Clock, ReferralWorkflow, SharedReferral, WorkflowHandle};
