//! In-memory, insertion-ordered record collections.

use clinic_model::{
    Appointment, Clinician, EntityKind, Facility, Patient, Prescription, Record, Referral, Staff,
};

/// Where a replacement record lands in its collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Append at the end, as delete followed by add would.
    #[default]
    MoveToEnd,
    /// Take the slot of the first record with the same key.
    KeepPosition,
}

/// An ordered collection of one entity type.
///
/// Keys are not unique: `add` never checks, `find_by_id` returns the first
/// match and `delete_by_id` removes every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record in insertion order, read-only.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// An independent copy of every record in insertion order.
    pub fn to_vec(&self) -> Vec<R> {
        self.records.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record unconditionally.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    /// Removes every record whose key equals `id`.
    ///
    /// Returns true if at least one record was removed.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.key() != id);
        self.records.len() != before
    }

    /// The first record whose key equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.key() == id)
    }

    /// Removes every record keyed `id` and inserts `record` in one step.
    ///
    /// The new record is inserted even when nothing matched `id`, in which
    /// case it is appended. Returns the number of records removed.
    pub fn replace_by_id(&mut self, id: &str, record: R, placement: Placement) -> usize {
        let first = self.records.iter().position(|r| r.key() == id);
        let before = self.records.len();
        self.records.retain(|r| r.key() != id);
        let removed = before - self.records.len();

        match (placement, first) {
            // Everything before `first` was kept, so the index is still valid.
            (Placement::KeepPosition, Some(index)) => self.records.insert(index, record),
            _ => self.records.push(record),
        }
        removed
    }
}

impl<R: Record> Extend<R> for Collection<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Access to the collection holding records of type `R`.
pub trait Holds<R: Record> {
    fn collection(&self) -> &Collection<R>;
    fn collection_mut(&mut self) -> &mut Collection<R>;
}

/// One independent collection per entity type.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    patients: Collection<Patient>,
    clinicians: Collection<Clinician>,
    facilities: Collection<Facility>,
    appointments: Collection<Appointment>,
    prescriptions: Collection<Prescription>,
    referrals: Collection<Referral>,
    staff: Collection<Staff>,
}

macro_rules! entity_collections {
    ($($field:ident, $field_mut:ident => $record:ty;)*) => {
        impl Repository {
            $(
                pub fn $field(&self) -> &Collection<$record> {
                    &self.$field
                }

                pub fn $field_mut(&mut self) -> &mut Collection<$record> {
                    &mut self.$field
                }
            )*
        }

        $(
            impl Holds<$record> for Repository {
                fn collection(&self) -> &Collection<$record> {
                    &self.$field
                }

                fn collection_mut(&mut self) -> &mut Collection<$record> {
                    &mut self.$field
                }
            }
        )*
    };
}

entity_collections! {
    patients, patients_mut => Patient;
    clinicians, clinicians_mut => Clinician;
    facilities, facilities_mut => Facility;
    appointments, appointments_mut => Appointment;
    prescriptions, prescriptions_mut => Prescription;
    referrals, referrals_mut => Referral;
    staff, staff_mut => Staff;
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection for `R`, chosen by type.
    pub fn get<R: Record>(&self) -> &Collection<R>
    where
        Self: Holds<R>,
    {
        <Self as Holds<R>>::collection(self)
    }

    pub fn get_mut<R: Record>(&mut self) -> &mut Collection<R>
    where
        Self: Holds<R>,
    {
        <Self as Holds<R>>::collection_mut(self)
    }

    /// Number of records held for `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Patient => self.patients.len(),
            EntityKind::Clinician => self.clinicians.len(),
            EntityKind::Facility => self.facilities.len(),
            EntityKind::Appointment => self.appointments.len(),
            EntityKind::Prescription => self.prescriptions.len(),
            EntityKind::Referral => self.referrals.len(),
            EntityKind::Staff => self.staff.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: &str, role: &str) -> Staff {
        Staff {
            staff_id: id.to_string(),
            role: role.to_string(),
            ..Staff::default()
        }
    }

    fn ids(collection: &Collection<Staff>) -> Vec<&str> {
        collection.iter().map(|s| s.staff_id.as_str()).collect()
    }

    #[test]
    fn test_add_allows_duplicate_keys() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));
        collection.add(staff("S1", "Receptionist"));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.find_by_id("S1").unwrap().role, "Porter");
    }

    #[test]
    fn test_delete_removes_every_match() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));
        collection.add(staff("S2", "Cleaner"));
        collection.add(staff("S1", "Receptionist"));

        assert!(collection.delete_by_id("S1"));
        assert_eq!(ids(&collection), vec!["S2"]);
    }

    #[test]
    fn test_delete_absent_id_changes_nothing() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));
        let before = collection.clone();

        assert!(!collection.delete_by_id("S9"));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_find_absent_is_none() {
        let collection: Collection<Staff> = Collection::new();
        assert!(collection.find_by_id("S1").is_none());
    }

    #[test]
    fn test_replace_move_to_end() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));
        collection.add(staff("S2", "Cleaner"));

        let removed = collection.replace_by_id("S1", staff("S1", "Manager"), Placement::MoveToEnd);

        assert_eq!(removed, 1);
        assert_eq!(ids(&collection), vec!["S2", "S1"]);
        assert_eq!(collection.find_by_id("S1").unwrap().role, "Manager");
    }

    #[test]
    fn test_replace_keep_position_collapses_duplicates() {
        let mut collection = Collection::new();
        collection.add(staff("S0", "Driver"));
        collection.add(staff("S1", "Porter"));
        collection.add(staff("S2", "Cleaner"));
        collection.add(staff("S1", "Receptionist"));

        let removed =
            collection.replace_by_id("S1", staff("S1", "Manager"), Placement::KeepPosition);

        assert_eq!(removed, 2);
        assert_eq!(ids(&collection), vec!["S0", "S1", "S2"]);
    }

    #[test]
    fn test_replace_unknown_id_appends() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));

        let removed = collection.replace_by_id("S9", staff("S9", "Chef"), Placement::KeepPosition);

        assert_eq!(removed, 0);
        assert_eq!(ids(&collection), vec!["S1", "S9"]);
    }

    #[test]
    fn test_list_copy_is_independent() {
        let mut collection = Collection::new();
        collection.add(staff("S1", "Porter"));

        let mut copy = collection.to_vec();
        copy[0].role = "Changed".to_string();
        copy.clear();

        assert_eq!(collection.list()[0].role, "Porter");
    }

    #[test]
    fn test_repository_collections_are_independent() {
        let mut repository = Repository::new();
        repository.staff_mut().add(staff("S1", "Porter"));
        repository.get_mut::<Patient>().add(Patient {
            patient_id: "S1".to_string(),
            ..Patient::default()
        });

        assert!(repository.staff_mut().delete_by_id("S1"));
        assert_eq!(repository.count(EntityKind::Staff), 0);
        assert_eq!(repository.count(EntityKind::Patient), 1);
        assert_eq!(repository.get::<Patient>().len(), 1);
    }
}
