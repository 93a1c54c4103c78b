//! Entity kinds and their fixed source layout properties.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven entity types held by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Patient,
    Clinician,
    Facility,
    Appointment,
    Prescription,
    Referral,
    Staff,
}

impl EntityKind {
    /// All kinds in load order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Patient,
        EntityKind::Clinician,
        EntityKind::Facility,
        EntityKind::Appointment,
        EntityKind::Prescription,
        EntityKind::Referral,
        EntityKind::Staff,
    ];

    /// Fixed file name of the extract inside a source directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            EntityKind::Patient => "patients.csv",
            EntityKind::Clinician => "clinicians.csv",
            EntityKind::Facility => "facilities.csv",
            EntityKind::Appointment => "appointments.csv",
            EntityKind::Prescription => "prescriptions.csv",
            EntityKind::Referral => "referrals.csv",
            EntityKind::Staff => "staff.csv",
        }
    }

    /// Minimum number of fields a data line needs to become a record.
    ///
    /// Lines with more fields are accepted and the surplus is ignored.
    pub const fn required_columns(self) -> usize {
        match self {
            EntityKind::Patient => 14,
            EntityKind::Clinician => 12,
            EntityKind::Facility => 11,
            EntityKind::Appointment => 13,
            EntityKind::Prescription => 15,
            EntityKind::Referral => 16,
            EntityKind::Staff => 12,
        }
    }

    /// Plural label used in diagnostics ("patients", "staff", ...).
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Clinician => "clinicians",
            EntityKind::Facility => "facilities",
            EntityKind::Appointment => "appointments",
            EntityKind::Prescription => "prescriptions",
            EntityKind::Referral => "referrals",
            EntityKind::Staff => "staff",
        }
    }

    /// Parse a kind from its singular or plural name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| {
            lowered == kind.label() || lowered == kind.singular() || lowered == kind.file_name()
        })
    }

    fn singular(self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Clinician => "clinician",
            EntityKind::Facility => "facility",
            EntityKind::Appointment => "appointment",
            EntityKind::Prescription => "prescription",
            EntityKind::Referral => "referral",
            EntityKind::Staff => "staff",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
