use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A GP surgery, hospital or clinic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub facility_id: String,
    pub facility_name: String,
    pub facility_type: String,
    pub address: String,
    pub postcode: String,
    pub phone_number: String,
    pub email: String,
    pub opening_hours: String,
    pub manager_name: String,
    pub capacity: String,
    pub specialities_offered: String,
}

impl Record for Facility {
    const KIND: EntityKind = EntityKind::Facility;

    fn key(&self) -> &str {
        &self.facility_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            facility_id,
            facility_name,
            facility_type,
            address,
            postcode,
            phone_number,
            email,
            opening_hours,
            manager_name,
            capacity,
            specialities_offered,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            facility_id: facility_id.clone(),
            facility_name: facility_name.clone(),
            facility_type: facility_type.clone(),
            address: address.clone(),
            postcode: postcode.clone(),
            phone_number: phone_number.clone(),
            email: email.clone(),
            opening_hours: opening_hours.clone(),
            manager_name: manager_name.clone(),
            capacity: capacity.clone(),
            specialities_offered: specialities_offered.clone(),
        })
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.facility_name, self.facility_type, self.facility_id
        )
    }
}
