//! Clinical entity records.
//!
//! Every entity is a flat record of string attributes. Identifiers, dates and
//! amounts are opaque strings; nothing here parses or validates their content.
//! Cross-entity references (patient, clinician, facility, appointment ids) are
//! plain foreign keys and are never checked against each other.

pub mod appointment;
pub mod clinician;
pub mod facility;
pub mod kind;
pub mod patient;
pub mod prescription;
pub mod record;
pub mod referral;
pub mod staff;

pub use appointment::Appointment;
pub use clinician::Clinician;
pub use facility::Facility;
pub use kind::EntityKind;
pub use patient::Patient;
pub use prescription::Prescription;
pub use record::Record;
pub use referral::{PENDING_STATUS, Referral};
pub use staff::Staff;
