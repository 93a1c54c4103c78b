//! Composition root tying the repository to the referral workflow.

use std::path::Path;
use std::sync::{Arc, RwLock};

use clinic_model::{Record, Referral};

use crate::error::Result;
use crate::pipeline::{LoadReport, load_all};
use crate::referral::{SharedReferral, WorkflowHandle};
use crate::repository::{Holds, Placement, Repository};

/// The record repository plus the referral workflow it feeds.
///
/// Presentation code drives everything through this type: per-entity CRUD
/// via [`Clinic::repository_mut`], updates via [`Clinic::update`], and the
/// referral operations below.
#[derive(Debug)]
pub struct Clinic {
    repository: Repository,
    workflow: WorkflowHandle,
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new()
    }
}

impl Clinic {
    /// A clinic wired to the process-wide workflow.
    pub fn new() -> Self {
        Self::with_workflow(WorkflowHandle::global())
    }

    /// A clinic wired to the given workflow.
    pub fn with_workflow(workflow: WorkflowHandle) -> Self {
        Self {
            repository: Repository::new(),
            workflow,
        }
    }

    /// Loads every extract in `dir`. See [`load_all`].
    pub fn load_all(&mut self, dir: &Path) -> LoadReport {
        load_all(&mut self.repository, dir)
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut Repository {
        &mut self.repository
    }

    pub fn workflow(&self) -> &WorkflowHandle {
        &self.workflow
    }

    /// Replaces every record keyed `id` with `record`, moving it to the end.
    ///
    /// Returns how many records were replaced. The new record is stored
    /// even when none matched.
    pub fn update<R: Record>(&mut self, id: &str, record: R) -> usize
    where
        Repository: Holds<R>,
    {
        self.update_with::<R>(id, record, Placement::MoveToEnd)
    }

    pub fn update_with<R: Record>(&mut self, id: &str, record: R, placement: Placement) -> usize
    where
        Repository: Holds<R>,
    {
        self.repository
            .get_mut::<R>()
            .replace_by_id(id, record, placement)
    }

    /// Stores the referral and queues it, which records its first audit
    /// entries. Returns the queued handle.
    ///
    /// The repository keeps its own copy. Edits made through the returned
    /// handle reach the queue only; use [`Clinic::update_referral`] to
    /// change the stored record.
    pub fn add_referral(&mut self, referral: Referral) -> SharedReferral {
        self.repository.referrals_mut().add(referral.clone());
        self.enqueue(referral)
    }

    /// Replaces the referral keyed `id` and queues the new version.
    ///
    /// Handles queued earlier still hold the old version.
    pub fn update_referral(&mut self, id: &str, referral: Referral) -> SharedReferral {
        self.repository
            .referrals_mut()
            .replace_by_id(id, referral.clone(), Placement::MoveToEnd);
        self.enqueue(referral)
    }

    /// Removes the referral from the repository. Queued copies stay queued.
    pub fn delete_referral(&mut self, id: &str) -> bool {
        self.repository.referrals_mut().delete_by_id(id)
    }

    pub fn find_referral(&self, id: &str) -> Option<&Referral> {
        self.repository.referrals().find_by_id(id)
    }

    /// Exports the referral document; failures are logged, not returned.
    pub fn generate_referral_file(&self, referral: &Referral, path: &Path) {
        self.workflow.generate_referral_file(referral, path);
    }

    /// # Errors
    ///
    /// Returns [`crate::CoreError::WriteFailure`] when the document cannot be
    /// written.
    pub fn try_generate_referral_file(&self, referral: &Referral, path: &Path) -> Result<()> {
        self.workflow.try_generate_referral_file(referral, path)
    }

    /// Queues a referral without storing it in the repository.
    pub fn enqueue(&self, referral: Referral) -> SharedReferral {
        let shared = Arc::new(RwLock::new(referral));
        self.workflow.add_to_queue(Arc::clone(&shared));
        shared
    }
}
