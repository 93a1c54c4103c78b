use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A non-clinical staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub facility_id: String,
    pub phone_number: String,
    pub email: String,
    pub employment_status: String,
    pub start_date: String,
    pub line_manager: String,
    pub access_level: String,
}

impl Record for Staff {
    const KIND: EntityKind = EntityKind::Staff;

    fn key(&self) -> &str {
        &self.staff_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            staff_id,
            first_name,
            last_name,
            role,
            department,
            facility_id,
            phone_number,
            email,
            employment_status,
            start_date,
            line_manager,
            access_level,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            staff_id: staff_id.clone(),
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            role: role.clone(),
            department: department.clone(),
            facility_id: facility_id.clone(),
            phone_number: phone_number.clone(),
            email: email.clone(),
            employment_status: employment_status.clone(),
            start_date: start_date.clone(),
            line_manager: line_manager.clone(),
            access_level: access_level.clone(),
        })
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({})",
            self.first_name, self.last_name, self.role, self.staff_id
        )
    }
}
