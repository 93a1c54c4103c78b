use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// Status value that makes a queued referral eligible for processing.
pub const PENDING_STATUS: &str = "Pending";

/// A referral of a patient from one clinician and facility to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub referral_id: String,
    pub patient_id: String,
    pub referring_clinician_id: String,
    pub receiving_clinician_id: String,
    pub referring_facility_id: String,
    pub receiving_facility_id: String,
    pub referral_date: String,
    pub urgency: String,
    pub referral_reason: String,
    pub clinical_summary: String,
    pub requested_investigations: String,
    pub status: String,
    pub appointment_id: String,
    pub notes: String,
    pub created_date: String,
    pub last_updated: String,
}

impl Referral {
    /// True when the status is literally `"Pending"`.
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_STATUS
    }
}

impl Record for Referral {
    const KIND: EntityKind = EntityKind::Referral;

    fn key(&self) -> &str {
        &self.referral_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            referral_id,
            patient_id,
            referring_clinician_id,
            receiving_clinician_id,
            referring_facility_id,
            receiving_facility_id,
            referral_date,
            urgency,
            referral_reason,
            clinical_summary,
            requested_investigations,
            status,
            appointment_id,
            notes,
            created_date,
            last_updated,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            referral_id: referral_id.clone(),
            patient_id: patient_id.clone(),
            referring_clinician_id: referring_clinician_id.clone(),
            receiving_clinician_id: receiving_clinician_id.clone(),
            referring_facility_id: referring_facility_id.clone(),
            receiving_facility_id: receiving_facility_id.clone(),
            referral_date: referral_date.clone(),
            urgency: urgency.clone(),
            referral_reason: referral_reason.clone(),
            clinical_summary: clinical_summary.clone(),
            requested_investigations: requested_investigations.clone(),
            status: status.clone(),
            appointment_id: appointment_id.clone(),
            notes: notes.clone(),
            created_date: created_date.clone(),
            last_updated: last_updated.clone(),
        })
    }
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}] ({})",
            self.referral_id,
            self.referring_facility_id,
            self.receiving_facility_id,
            self.urgency,
            self.status
        )
    }
}
