use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A GP, consultant, nurse or other registered clinician.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinician {
    pub clinician_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Professional title ("Dr.", "Nurse", ...).
    pub title: String,
    pub speciality: String,
    pub gmc_number: String,
    pub phone_number: String,
    pub email: String,
    /// Facility id of the clinician's workplace.
    pub workplace_id: String,
    pub workplace_type: String,
    pub employment_status: String,
    pub start_date: String,
}

impl Record for Clinician {
    const KIND: EntityKind = EntityKind::Clinician;

    fn key(&self) -> &str {
        &self.clinician_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            clinician_id,
            first_name,
            last_name,
            title,
            speciality,
            gmc_number,
            phone_number,
            email,
            workplace_id,
            workplace_type,
            employment_status,
            start_date,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            clinician_id: clinician_id.clone(),
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            title: title.clone(),
            speciality: speciality.clone(),
            gmc_number: gmc_number.clone(),
            phone_number: phone_number.clone(),
            email: email.clone(),
            workplace_id: workplace_id.clone(),
            workplace_type: workplace_type.clone(),
            employment_status: employment_status.clone(),
            start_date: start_date.clone(),
        })
    }
}

impl fmt::Display for Clinician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} - {} ({})",
            self.title, self.first_name, self.last_name, self.speciality, self.clinician_id
        )
    }
}
