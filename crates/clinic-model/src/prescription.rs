use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::record::{Record, take_columns};

/// A medication prescribed to a patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub prescription_id: String,
    pub patient_id: String,
    pub clinician_id: String,
    pub appointment_id: String,
    pub prescription_date: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration_days: String,
    pub quantity: String,
    pub instructions: String,
    pub pharmacy_name: String,
    /// Collection status ("Issued", "Collected", ...).
    pub status: String,
    pub issue_date: String,
    pub collection_date: String,
}

impl Record for Prescription {
    const KIND: EntityKind = EntityKind::Prescription;

    fn key(&self) -> &str {
        &self.prescription_id
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            prescription_id,
            patient_id,
            clinician_id,
            appointment_id,
            prescription_date,
            medication_name,
            dosage,
            frequency,
            duration_days,
            quantity,
            instructions,
            pharmacy_name,
            status,
            issue_date,
            collection_date,
        ] = take_columns(Self::KIND, fields)?
        else {
            return None;
        };
        Some(Self {
            prescription_id: prescription_id.clone(),
            patient_id: patient_id.clone(),
            clinician_id: clinician_id.clone(),
            appointment_id: appointment_id.clone(),
            prescription_date: prescription_date.clone(),
            medication_name: medication_name.clone(),
            dosage: dosage.clone(),
            frequency: frequency.clone(),
            duration_days: duration_days.clone(),
            quantity: quantity.clone(),
            instructions: instructions.clone(),
            pharmacy_name: pharmacy_name.clone(),
            status: status.clone(),
            issue_date: issue_date.clone(),
            collection_date: collection_date.clone(),
        })
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.medication_name, self.dosage, self.frequency, self.prescription_id
        )
    }
}
