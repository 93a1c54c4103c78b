//! Fixed plain-text layouts for referral artifacts.
//!
//! Downstream audit tooling parses these by line, so section headers, field
//! labels and marker widths must not change.

use chrono::NaiveDate;
use clinic_model::Referral;

const EMAIL_CLOSING: &str = "=====================================";
const EHR_CLOSING: &str = "========================================";

/// Renders the exported referral document.
pub fn render_referral_document(referral: &Referral) -> String {
    format!(
        "=== PATIENT REFERRAL ===\n\n\
         Referral ID: {id}\n\
         Date: {date}\n\
         Urgency Level: {urgency}\n\
         Status: {status}\n\n\
         PATIENT INFORMATION:\n\
         Patient ID: {patient}\n\n\
         REFERRING INFORMATION:\n\
         Clinician ID: {from_clinician}\n\
         Facility: {from_facility}\n\n\
         RECEIVING INFORMATION:\n\
         Clinician ID: {to_clinician}\n\
         Facility: {to_facility}\n\n\
         CLINICAL SUMMARY:\n\
         {summary}\n\n\
         === END OF REFERRAL ===\n",
        id = referral.referral_id,
        date = referral.referral_date,
        urgency = referral.urgency,
        status = referral.status,
        patient = referral.patient_id,
        from_clinician = referral.referring_clinician_id,
        from_facility = referral.referring_facility_id,
        to_clinician = referral.receiving_clinician_id,
        to_facility = referral.receiving_facility_id,
        summary = referral.clinical_summary,
    )
}

/// Renders one simulated inter-facility email entry, dated `date`.
pub fn render_email(referral: &Referral, date: NaiveDate) -> String {
    format!(
        "=== REFERRAL EMAIL COMMUNICATION ===\n\
         Date: {date}\n\
         Referral ID: {id}\n\
         Patient ID: {patient}\n\
         From: {from}\n\
         To: {to}\n\
         Urgency: {urgency}\n\
         Clinical Summary: {summary}\n\
         Status: {status}\n\
         {EMAIL_CLOSING}\n\n",
        date = date.format("%Y-%m-%d"),
        id = referral.referral_id,
        patient = referral.patient_id,
        from = referral.referring_facility_id,
        to = referral.receiving_facility_id,
        urgency = referral.urgency,
        summary = referral.clinical_summary,
        status = referral.status,
    )
}

/// Renders one electronic health record update entry, stamped `date`.
pub fn render_ehr_update(referral: &Referral, date: NaiveDate) -> String {
    format!(
        "=== ELECTRONIC HEALTH RECORD UPDATE ===\n\
         Timestamp: {date}\n\
         Referral ID: {id}\n\
         Patient ID: {patient}\n\
         Action: Referral Created/Updated\n\
         Referring Clinician: {from}\n\
         Receiving Clinician: {to}\n\
         Clinical Summary: {summary}\n\
         Audit Trail: Referral processed by system\n\
         {EHR_CLOSING}\n\n",
        date = date.format("%Y-%m-%d"),
        id = referral.referral_id,
        patient = referral.patient_id,
        from = referral.referring_clinician_id,
        to = referral.receiving_clinician_id,
        summary = referral.clinical_summary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn referral() -> Referral {
        Referral {
            referral_id: "R1".to_string(),
            patient_id: "P1".to_string(),
            referring_clinician_id: "C1".to_string(),
            receiving_clinician_id: "C2".to_string(),
            referring_facility_id: "F1".to_string(),
            receiving_facility_id: "F2".to_string(),
            referral_date: "2024-05-01".to_string(),
            urgency: "Urgent".to_string(),
            clinical_summary: "Chest pain on exertion".to_string(),
            status: "Pending".to_string(),
            ..Referral::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn test_document_layout() {
        insta::assert_snapshot!(render_referral_document(&referral()), @r"
        === PATIENT REFERRAL ===

        Referral ID: R1
        Date: 2024-05-01
        Urgency Level: Urgent
        Status: Pending

        PATIENT INFORMATION:
        Patient ID: P1

        REFERRING INFORMATION:
        Clinician ID: C1
        Facility: F1

        RECEIVING INFORMATION:
        Clinician ID: C2
        Facility: F2

        CLINICAL SUMMARY:
        Chest pain on exertion

        === END OF REFERRAL ===
        ");
    }

    #[test]
    fn test_document_ends_with_single_newline() {
        let document = render_referral_document(&referral());
        assert!(document.starts_with("=== PATIENT REFERRAL ===\n\nReferral ID: R1\n"));
        assert!(document.ends_with("Chest pain on exertion\n\n=== END OF REFERRAL ===\n"));
    }

    #[test]
    fn test_email_layout() {
        let expected = "=== REFERRAL EMAIL COMMUNICATION ===\n\
                        Date: 2024-05-02\n\
                        Referral ID: R1\n\
                        Patient ID: P1\n\
                        From: F1\n\
                        To: F2\n\
                        Urgency: Urgent\n\
                        Clinical Summary: Chest pain on exertion\n\
                        Status: Pending\n\
                        =====================================\n\n";
        assert_eq!(render_email(&referral(), date()), expected);
    }

    #[test]
    fn test_ehr_layout() {
        let expected = "=== ELECTRONIC HEALTH RECORD UPDATE ===\n\
                        Timestamp: 2024-05-02\n\
                        Referral ID: R1\n\
                        Patient ID: P1\n\
                        Action: Referral Created/Updated\n\
                        Referring Clinician: C1\n\
                        Receiving Clinician: C2\n\
                        Clinical Summary: Chest pain on exertion\n\
                        Audit Trail: Referral processed by system\n\
                        ========================================\n\n";
        assert_eq!(render_ehr_update(&referral(), date()), expected);
    }
}
