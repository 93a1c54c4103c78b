//! Integration tests for the terminal summary tables.

use std::fs;

use clinic_cli::summary::{load_summary_table, record_table};
use clinic_core::{Clinic, LoadStatus, WorkflowHandle};
use clinic_model::Patient;

#[test]
fn load_table_has_row_per_entity_plus_total() {
    let dir = tempfile::tempdir().unwrap();
    let header = (1..=14)
        .map(|i| format!("col{i}"))
        .collect::<Vec<_>>()
        .join(",");
    let row = "P001,Ada,Lovelace,1815-12-10,943 476 5919,F,07700 900001,ada@example.com,\
               1 Ada Street,AB1 2CD,Charles Babbage,07700 900002,2024-01-01,S01";
    fs::write(dir.path().join("patients.csv"), format!("{header}\n{row}\n")).unwrap();

    let mut clinic = Clinic::with_workflow(WorkflowHandle::new());
    let report = clinic.load_all(dir.path());
    assert_eq!(report.total_loaded(), 1);
    assert_eq!(report.missing().count(), 6);
    assert!(
        report
            .entities
            .iter()
            .any(|load| load.status == LoadStatus::Loaded)
    );

    let table = load_summary_table(&report);
    assert_eq!(table.row_count(), 8);

    let patients: Vec<Patient> = clinic.repository().patients().to_vec();
    let rendered = record_table(&patients).to_string();
    assert!(rendered.contains("P001"));
}
