//! Shared fixtures for clinic-core integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clinic_core::{ReferralWorkflow, WorkflowHandle};
use clinic_model::Referral;

pub const PATIENTS: &str = "patient_id,first_name,last_name,date_of_birth,nhs_number,gender,phone_number,email,address,postcode,emergency_contact_name,emergency_contact_phone,registration_date,gp_surgery_id
P1,Jane,Doe,1980-01-01,NHS123,F,0123,j@x.com,1 Road,PC1,Contact,0199,2020-01-01,GP1
P2,Raj,Patel,1975-06-30,NHS456,M,0124,r@x.com,\"Flat 2, 9 Lane\",PC2,Mina Patel,0198,2019-03-14,GP1
";

pub const CLINICIANS: &str = "clinician_id,first_name,last_name,title,speciality,gmc_number,phone_number,email,workplace_id,workplace_type,employment_status,start_date
C1,Sarah,Khan,Dr.,General Practice,GMC1,0100,s@x.com,F1,GP Surgery,Full-time,2015-04-01
C2,Tom,Reed,Dr.,Cardiology,GMC2,0101,t@x.com,F2,Hospital,Full-time,2018-09-12
";

pub const FACILITIES: &str = "facility_id,facility_name,facility_type,address,postcode,phone_number,email,opening_hours,manager_name,capacity,specialities_offered
F1,Riverside Surgery,GP Surgery,1 Road,PC1,0100,f1@x.com,08:00-18:00,Ann Lee,40,General Practice
F2,City Hospital,Hospital,2 Road,PC2,0200,f2@x.com,24/7,Bo Chen,500,\"Cardiology, Renal\"
";

pub const APPOINTMENTS: &str = "appointment_id,patient_id,clinician_id,facility_id,appointment_date,appointment_time,duration_minutes,appointment_type,status,reason_for_visit,notes,created_date,last_modified
A1,P1,C1,F1,2024-05-01,09:00,15,Routine,Scheduled,Chest pain,,2024-04-20,2024-04-20
";

pub const PRESCRIPTIONS: &str = "prescription_id,patient_id,clinician_id,appointment_id,prescription_date,medication_name,dosage,frequency,duration_days,quantity,instructions,pharmacy_name,status,issue_date,collection_date
RX1,P1,C1,A1,2024-05-01,Aspirin,75mg,Once daily,28,28,With food,High St Pharmacy,Issued,2024-05-01,
";

pub const REFERRALS: &str = "referral_id,patient_id,referring_clinician_id,referred_to_clinician_id,referring_facility_id,referred_to_facility_id,referral_date,urgency_level,referral_reason,clinical_summary,requested_investigations,status,appointment_id,notes,created_date,last_updated
R1,P1,C1,C2,F1,F2,2024-05-01,Urgent,Chest pain,Chest pain on exertion,ECG,Pending,A1,,2024-05-01,2024-05-01
R2,P2,C1,C2,F1,F2,2024-05-03,Routine,Palpitations,Intermittent palpitations,Holter,Completed,,,2024-05-03,2024-05-10
";

pub const STAFF: &str = "staff_id,first_name,last_name,role,department,facility_id,phone_number,email,employment_status,start_date,line_manager,access_level
S1,Ann,Lee,Practice Manager,Administration,F1,0100,a@x.com,Full-time,2012-01-09,,Admin
";

/// Writes every extract into `dir`, skipping file names listed in `omit`.
pub fn write_sources(dir: &Path, omit: &[&str]) {
    let files = [
        ("patients.csv", PATIENTS),
        ("clinicians.csv", CLINICIANS),
        ("facilities.csv", FACILITIES),
        ("appointments.csv", APPOINTMENTS),
        ("prescriptions.csv", PRESCRIPTIONS),
        ("referrals.csv", REFERRALS),
        ("staff.csv", STAFF),
    ];
    for (name, content) in files {
        if !omit.contains(&name) {
            fs::write(dir.join(name), content).unwrap();
        }
    }
}

pub fn fixed_workflow() -> WorkflowHandle {
    WorkflowHandle::from_workflow(ReferralWorkflow::with_clock(Box::new(|| {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    })))
}

pub fn referral(id: &str, status: &str) -> Referral {
    Referral {
        referral_id: id.to_string(),
        patient_id: "P1".to_string(),
        referring_clinician_id: "C1".to_string(),
        receiving_clinician_id: "C2".to_string(),
        referring_facility_id: "F1".to_string(),
        receiving_facility_id: "F2".to_string(),
        referral_date: "2024-05-01".to_string(),
        urgency: "Urgent".to_string(),
        clinical_summary: "Chest pain on exertion".to_string(),
        status: status.to_string(),
        ..Referral::default()
    }
}
