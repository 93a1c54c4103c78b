//! Referral queue and audit logs.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{
    Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock, RwLockReadGuard, TryLockError,
};

use chrono::NaiveDate;
use clinic_model::Referral;

use super::render::{render_ehr_update, render_email, render_referral_document};
use crate::error::{CoreError, Result};

/// A referral shared between its owner and the queue.
///
/// The queue keeps the handle, not a copy, so later edits made through
/// another clone of the handle are seen when the queue is processed.
pub type SharedReferral = Arc<RwLock<Referral>>;

/// Source of the date stamped on audit entries.
pub type Clock = Box<dyn Fn() -> NaiveDate + Send>;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn read_referral(shared: &SharedReferral) -> RwLockReadGuard<'_, Referral> {
    shared.read().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the referral queue and the append-only email and EHR audit logs.
pub struct ReferralWorkflow {
    queue: Vec<SharedReferral>,
    email_communications: Vec<String>,
    ehr_updates: Vec<String>,
    clock: Clock,
}

impl Default for ReferralWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReferralWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferralWorkflow")
            .field("queue", &self.queue.len())
            .field("email_communications", &self.email_communications.len())
            .field("ehr_updates", &self.ehr_updates.len())
            .finish_non_exhaustive()
    }
}

impl ReferralWorkflow {
    /// Creates an empty workflow stamping entries with the local date.
    pub fn new() -> Self {
        Self::with_clock(Box::new(local_today))
    }

    /// Creates an empty workflow with a custom date source.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            queue: Vec::new(),
            email_communications: Vec::new(),
            ehr_updates: Vec::new(),
            clock,
        }
    }

    /// Appends the referral to the queue and records one email and one EHR
    /// entry for it. Queueing the same referral again is not deduplicated.
    pub fn add_to_queue(&mut self, referral: SharedReferral) {
        {
            let current = read_referral(&referral);
            tracing::info!(
                referral_id = %current.referral_id,
                status = %current.status,
                "referral queued"
            );
            self.record_audit(&current);
        }
        self.queue.push(referral);
    }

    /// Records a fresh email and EHR entry for every queued referral whose
    /// status is exactly `"Pending"`. Returns how many referrals matched.
    ///
    /// Status is left untouched, so each call on an unchanged pending
    /// referral appends another pair of entries.
    // TODO: transition processed referrals out of "Pending" once repeated
    // audit entries are no longer expected by downstream parsers.
    pub fn process_queue(&mut self) -> usize {
        let today = (self.clock)();
        let mut processed = 0;
        for shared in &self.queue {
            let referral = read_referral(shared);
            if referral.is_pending() {
                self.email_communications
                    .push(render_email(&referral, today));
                self.ehr_updates.push(render_ehr_update(&referral, today));
                processed += 1;
            }
        }
        tracing::debug!(
            queued = self.queue.len(),
            processed,
            "referral queue processed"
        );
        processed
    }

    /// Writes the referral document to `path`, replacing any existing file,
    /// and records one email and one EHR entry.
    ///
    /// A write failure is logged and swallowed; no audit entries are
    /// recorded in that case.
    pub fn generate_referral_file(&mut self, referral: &Referral, path: &Path) {
        if let Err(error) = self.try_generate_referral_file(referral, path) {
            tracing::error!(
                referral_id = %referral.referral_id,
                %error,
                "error generating referral file"
            );
        }
    }

    /// Like [`generate_referral_file`](Self::generate_referral_file) but
    /// returns the write failure.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WriteFailure`] when the document cannot be written.
    pub fn try_generate_referral_file(&mut self, referral: &Referral, path: &Path) -> Result<()> {
        fs::write(path, render_referral_document(referral)).map_err(|source| {
            CoreError::WriteFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::info!(
            referral_id = %referral.referral_id,
            path = %path.display(),
            "referral document written"
        );
        self.record_audit(referral);
        Ok(())
    }

    /// Snapshot of the email log.
    pub fn email_communications(&self) -> Vec<String> {
        self.email_communications.clone()
    }

    /// Snapshot of the EHR update log.
    pub fn ehr_updates(&self) -> Vec<String> {
        self.ehr_updates.clone()
    }

    /// Snapshot of the queue. The handles are shared with the queue; the
    /// returned vector is not.
    pub fn referral_queue(&self) -> Vec<SharedReferral> {
        self.queue.clone()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Empties both audit logs. The queue is kept.
    pub fn clear_audit_trail(&mut self) {
        self.email_communications.clear();
        self.ehr_updates.clear();
    }

    fn record_audit(&mut self, referral: &Referral) {
        let today = (self.clock)();
        self.email_communications
            .push(render_email(referral, today));
        self.ehr_updates.push(render_ehr_update(referral, today));
    }
}

static GLOBAL_WORKFLOW: OnceLock<WorkflowHandle> = OnceLock::new();

/// Cloneable handle to one [`ReferralWorkflow`].
///
/// Clones share the same workflow. Callers are expected to serialize
/// mutating calls; the mutex only guards against torn state.
#[derive(Clone, Default)]
pub struct WorkflowHandle {
    inner: Arc<Mutex<ReferralWorkflow>>,
}

impl fmt::Debug for WorkflowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("WorkflowHandle");
        match self.inner.try_lock() {
            Ok(workflow) => tuple.field(&*workflow),
            Err(TryLockError::Poisoned(poisoned)) => tuple.field(&*poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => tuple.field(&format_args!("<locked>")),
        };
        tuple.finish()
    }
}

impl WorkflowHandle {
    /// A handle to a new, independent workflow.
    pub fn new() -> Self {
        Self::from_workflow(ReferralWorkflow::new())
    }

    pub fn from_workflow(workflow: ReferralWorkflow) -> Self {
        Self {
            inner: Arc::new(Mutex::new(workflow)),
        }
    }

    /// The process-wide workflow, created on first access.
    pub fn global() -> Self {
        GLOBAL_WORKFLOW.get_or_init(Self::new).clone()
    }

    /// True when both handles point at the same workflow.
    pub fn same_as(&self, other: &WorkflowHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Locks the workflow for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, ReferralWorkflow> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_to_queue(&self, referral: SharedReferral) {
        self.lock().add_to_queue(referral);
    }

    pub fn process_queue(&self) -> usize {
        self.lock().process_queue()
    }

    pub fn generate_referral_file(&self, referral: &Referral, path: &Path) {
        self.lock().generate_referral_file(referral, path);
    }

    /// # Errors
    ///
    /// Returns [`CoreError::WriteFailure`] when the document cannot be written.
    pub fn try_generate_referral_file(&self, referral: &Referral, path: &Path) -> Result<()> {
        self.lock().try_generate_referral_file(referral, path)
    }

    pub fn email_communications(&self) -> Vec<String> {
        self.lock().email_communications()
    }

    pub fn ehr_updates(&self) -> Vec<String> {
        self.lock().ehr_updates()
    }

    pub fn referral_queue(&self) -> Vec<SharedReferral> {
        self.lock().referral_queue()
    }

    pub fn clear_audit_trail(&self) {
        self.lock().clear_audit_trail();
    }
}
