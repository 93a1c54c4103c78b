use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{info, info_span};

use clinic_cli::config::Config;
use clinic_cli::summary::{WorkflowSummary, load_summary_table, record_table, workflow_table};
use clinic_core::{Clinic, Holds, LoadReport, Repository};
use clinic_model::{
    Appointment, Clinician, EntityKind, Facility, Patient, Prescription, Record, Referral, Staff,
};

use crate::cli::{ExportArgs, ListArgs, LoadArgs, ProcessArgs};

pub fn run_load(args: &LoadArgs, config: &Config) -> Result<LoadReport> {
    let data_dir = data_dir(args.data_dir.as_ref(), config);
    let mut clinic = Clinic::new();
    let report = clinic.load_all(&data_dir);
    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serialize load report")?;
        println!("{text}");
    } else {
        println!("Source: {}", report.source_dir.display());
        println!("{}", load_summary_table(&report));
    }
    Ok(report)
}

pub fn run_list(args: &ListArgs, config: &Config) -> Result<()> {
    let kind = EntityKind::parse(&args.entity)
        .ok_or_else(|| anyhow!("unknown entity `{}`", args.entity))?;
    let data_dir = data_dir(args.data_dir.as_ref(), config);
    let mut clinic = Clinic::new();
    clinic.load_all(&data_dir);
    let repository = clinic.repository();
    match kind {
        EntityKind::Patient => print_records::<Patient>(repository, args.json),
        EntityKind::Clinician => print_records::<Clinician>(repository, args.json),
        EntityKind::Facility => print_records::<Facility>(repository, args.json),
        EntityKind::Appointment => print_records::<Appointment>(repository, args.json),
        EntityKind::Prescription => print_records::<Prescription>(repository, args.json),
        EntityKind::Referral => print_records::<Referral>(repository, args.json),
        EntityKind::Staff => print_records::<Staff>(repository, args.json),
    }
}

fn print_records<R>(repository: &Repository, json: bool) -> Result<()>
where
    R: Record + Serialize + Display,
    Repository: Holds<R>,
{
    let records = repository.get::<R>().list();
    if json {
        let text = serde_json::to_string_pretty(records)
            .with_context(|| format!("serialize {}", R::KIND.label()))?;
        println!("{text}");
    } else {
        println!("{} ({})", R::KIND.label(), records.len());
        println!("{}", record_table(records));
    }
    Ok(())
}

pub fn run_referral_export(args: &ExportArgs, config: &Config) -> Result<PathBuf> {
    let span = info_span!("export", referral_id = %args.referral_id);
    let _guard = span.enter();
    let data_dir = data_dir(args.data_dir.as_ref(), config);
    let mut clinic = Clinic::new();
    clinic.load_all(&data_dir);
    let referral = clinic
        .find_referral(&args.referral_id)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "referral `{}` not found in {}",
                args.referral_id,
                data_dir.display()
            )
        })?;
    let output = args.output.clone().unwrap_or_else(|| {
        config
            .output_dir
            .join(format!("referral_{}.txt", referral.referral_id))
    });
    clinic
        .try_generate_referral_file(&referral, &output)
        .with_context(|| format!("export referral {}", referral.referral_id))?;
    info!(path = %output.display(), "referral exported");

    println!("Referral document: {}", output.display());
    let workflow = clinic.workflow();
    for entry in workflow
        .email_communications()
        .iter()
        .chain(workflow.ehr_updates().iter())
    {
        println!();
        println!("{entry}");
    }
    Ok(output)
}

pub fn run_referral_process(args: &ProcessArgs, config: &Config) -> Result<WorkflowSummary> {
    if args.passes == 0 {
        bail!("--passes must be at least 1");
    }
    let data_dir = data_dir(args.data_dir.as_ref(), config);
    let mut clinic = Clinic::new();
    clinic.load_all(&data_dir);
    let referrals = clinic.repository().referrals().to_vec();
    let queued = referrals.len();
    for referral in referrals {
        clinic.enqueue(referral);
    }

    let workflow = clinic.workflow();
    let processed = (0..args.passes).map(|_| workflow.process_queue()).sum();
    let emails = workflow.email_communications();
    let ehr = workflow.ehr_updates();
    let summary = WorkflowSummary {
        queued,
        passes: args.passes,
        processed,
        email_entries: emails.len(),
        ehr_entries: ehr.len(),
    };

    println!("{}", workflow_table(&summary));
    if args.show_entries {
        for entry in emails.iter().chain(ehr.iter()) {
            println!();
            println!("{entry}");
        }
    }
    Ok(summary)
}

fn data_dir(arg: Option<&PathBuf>, config: &Config) -> PathBuf {
    arg.map_or_else(|| config.data_dir.clone(), Clone::clone)
}
