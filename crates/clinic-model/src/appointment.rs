use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A booked appointment between a patient and a clinician at a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub facility_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub duration_minutes: String,
    pub appointment_type: String,
    pub status: String,
    pub reason_for_visit: String,
    pub notes: String,
    pub created_date: String,
    pub last_modified: String,
}

impl Record for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    fn key(&self) -> &str {
        &self.appointment_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            appointment_id,
            patient_id,
            clinician_id,
            facility_id,
            appointment_date,
            appointment_time,
            duration_minutes,
            appointment_type,
            status,
            reason_for_visit,
            notes,
            created_date,
            last_modified,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            appointment_id: appointment_id.clone(),
            patient_id: patient_id.clone(),
            clinician_id: clinician_id.clone(),
            facility_id: facility_id.clone(),
            appointment_date: appointment_date.clone(),
            appointment_time: appointment_time.clone(),
            duration_minutes: duration_minutes.clone(),
            appointment_type: appointment_type.clone(),
            status: status.clone(),
            reason_for_visit: reason_for_visit.clone(),
            notes: notes.clone(),
            created_date: created_date.clone(),
            last_modified: last_modified.clone(),
        })
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.appointment_id, self.appointment_date, self.appointment_time, self.status
        )
    }
}
