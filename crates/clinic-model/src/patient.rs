use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A registered patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub nhs_number: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub registration_date: String,
    /// Facility id of the patient's registered GP surgery.
    pub gp_surgery_id: String,
}

impl Record for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    fn key(&self) -> &str {
        &self.patient_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            patient_id,
            first_name,
            last_name,
            date_of_birth,
            nhs_number,
            gender,
            phone_number,
            email,
            address,
            postcode,
            emergency_contact_name,
            emergency_contact_phone,
            registration_date,
            gp_surgery_id,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            patient_id: patient_id.clone(),
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            date_of_birth: date_of_birth.clone(),
            nhs_number: nhs_number.clone(),
            gender: gender.clone(),
            phone_number: phone_number.clone(),
            email: email.clone(),
            address: address.clone(),
            postcode: postcode.clone(),
            emergency_contact_name: emergency_contact_name.clone(),
            emergency_contact_phone: emergency_contact_phone.clone(),
            registration_date: registration_date.clone(),
            gp_surgery_id: gp_surgery_id.clone(),
        })
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.patient_id
        )
    }
}
