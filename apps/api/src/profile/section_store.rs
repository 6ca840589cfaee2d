use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::models::entries::{
    EducationEntry, EducationField, EntryId, QaEntry, QaField, WorkEntry, WorkField,
};
use crate::profile::ids::IdGenerator;

/// A repeatable record kept in a [`SectionStore`].
pub trait SectionEntry: Clone + Default {
    /// A single field assignment.
    type Field;

    const SECTION: &'static str;

    fn id(&self) -> EntryId;
    fn set_id(&mut self, id: EntryId);
    fn apply(&mut self, field: Self::Field);
}

impl SectionEntry for WorkEntry {
    type Field = WorkField;
    const SECTION: &'static str = "work";

    fn id(&self) -> EntryId {
        self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, field: WorkField) {
        WorkEntry::apply(self, field);
    }
}

impl SectionEntry for EducationEntry {
    type Field = EducationField;
    const SECTION: &'static str = "education";

    fn id(&self) -> EntryId {
        self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, field: EducationField) {
        EducationEntry::apply(self, field);
    }
}

impl SectionEntry for QaEntry {
    type Field = QaField;
    const SECTION: &'static str = "qa";

    fn id(&self) -> EntryId {
        self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, field: QaField) {
        QaEntry::apply(self, field);
    }
}

/// Ordered collection of entries keyed by stable ids.
///
/// Insertion order is preserved; removal never reorders the survivors.
/// Operations on an id that is not present are silent no-ops.
pub struct SectionStore<E: SectionEntry> {
    entries: Vec<E>,
    ids: Box<dyn IdGenerator>,
}

impl<E: SectionEntry> fmt::Debug for SectionStore<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionStore")
            .field("section", &E::SECTION)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<E: SectionEntry> SectionStore<E> {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            entries: Vec::new(),
            ids,
        }
    }

    /// Appends a blank entry with `initial` applied over it and returns its id.
    pub fn add(&mut self, initial: impl IntoIterator<Item = E::Field>) -> EntryId {
        let id = self.ids.next_id();
        let mut entry = E::default();
        entry.set_id(id);
        for field in initial {
            entry.apply(field);
        }
        self.entries.push(entry);
        debug!(section = E::SECTION, %id, "entry added");
        id
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        let removed = self.entries.len() != before;
        if !removed {
            debug!(section = E::SECTION, %id, "remove ignored, no such entry");
        }
        removed
    }

    /// Returns whether an entry was updated.
    pub fn update(&mut self, id: EntryId, field: E::Field) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.apply(field);
                true
            }
            None => {
                debug!(section = E::SECTION, %id, "update ignored, no such entry");
                false
            }
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn list(&self) -> &[E] {
        &self.entries
    }

    /// Replaces the whole collection. Ids that are missing, out of range or
    /// repeated get a fresh id so the collection stays uniquely keyed.
    pub fn replace(&mut self, entries: Vec<E>) {
        for entry in &entries {
            if entry.id().is_assigned() {
                self.ids.observe(entry.id());
            }
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut repaired = 0usize;
        self.entries = entries
            .into_iter()
            .map(|mut entry| {
                if !entry.id().is_assigned() || !seen.insert(entry.id()) {
                    let fresh = self.ids.next_id();
                    seen.insert(fresh);
                    entry.set_id(fresh);
                    repaired += 1;
                }
                entry
            })
            .collect();

        if repaired > 0 {
            warn!(
                section = E::SECTION,
                repaired, "assigned fresh ids to entries with missing, out-of-range or duplicate ids"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ids::SequentialIds;

    fn work_store() -> SectionStore<WorkEntry> {
        SectionStore::new(Box::new(SequentialIds::default()))
    }

    fn title(v: &str) -> WorkField {
        WorkField::Title(v.to_string())
    }

    #[test]
    fn test_add_merges_initial_over_blank() {
        let mut store = work_store();
        let id = store.add([title("Engineer"), WorkField::Current(true)]);
        let entry = store.get(id).unwrap();
        assert_eq!(entry.title, "Engineer");
        assert!(entry.current);
        assert_eq!(entry.company, "");
    }

    #[test]
    fn test_add_without_fields_is_blank() {
        let mut store: SectionStore<EducationEntry> =
            SectionStore::new(Box::new(SequentialIds::default()));
        let id = store.add([]);
        let expected = EducationEntry {
            id,
            ..Default::default()
        };
        assert_eq!(store.list(), &[expected]);
    }

    #[test]
    fn test_ids_pairwise_distinct() {
        let mut store = work_store();
        let mut ids: Vec<EntryId> = (0..50).map(|_| store.add([])).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = work_store();
        let a = store.add([title("a")]);
        let b = store.add([title("b")]);
        let c = store.add([title("c")]);
        assert!(store.remove(b));
        let order: Vec<EntryId> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = work_store();
        store.add([title("a")]);
        assert!(!store.remove(EntryId(999)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_update_touches_only_named_field() {
        let mut store = work_store();
        let a = store.add([title("a"), WorkField::Company("Acme".into())]);
        let b = store.add([title("b")]);
        let before_b = store.get(b).unwrap().clone();

        assert!(store.update(a, WorkField::Location("Remote".into())));

        let after_a = store.get(a).unwrap();
        assert_eq!(after_a.location, "Remote");
        assert_eq!(after_a.title, "a");
        assert_eq!(after_a.company, "Acme");
        assert_eq!(store.get(b).unwrap(), &before_b);
        assert_eq!(store.list()[0].id, a);
    }

    #[test]
    fn test_update_after_remove_is_noop() {
        let mut store = work_store();
        let a = store.add([]);
        store.remove(a);
        assert!(!store.update(a, title("ghost")));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_replace_keeps_ids_and_order() {
        let mut store = work_store();
        store.add([title("old")]);
        let incoming = vec![
            WorkEntry {
                id: EntryId(1718000000002),
                title: "second".into(),
                ..Default::default()
            },
            WorkEntry {
                id: EntryId(1718000000001),
                title: "first".into(),
                ..Default::default()
            },
        ];
        store.replace(incoming.clone());
        assert_eq!(store.list(), incoming.as_slice());

        let next = store.add([]);
        assert!(next > EntryId(1718000000002));
    }

    #[test]
    fn test_replace_repairs_missing_and_duplicate_ids() {
        let mut store = work_store();
        store.replace(vec![
            WorkEntry {
                id: EntryId(5),
                ..Default::default()
            },
            WorkEntry {
                id: EntryId(5),
                title: "dup".into(),
                ..Default::default()
            },
            WorkEntry::default(),
        ]);
        let ids: Vec<EntryId> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids[0], EntryId(5));
        assert!(ids[1].is_assigned() && ids[1] != EntryId(5));
        assert!(ids[2].is_assigned() && ids[2] != ids[1] && ids[2] != EntryId(5));
        assert_eq!(store.list()[1].title, "dup");
    }

    #[test]
    fn test_replace_repairs_out_of_range_id() {
        let mut store = work_store();
        store.replace(vec![WorkEntry {
            id: EntryId(u64::MAX),
            title: "huge".into(),
            ..Default::default()
        }]);
        let repaired = store.list()[0].id;
        assert!(repaired.is_assigned());

        let next = store.add([]);
        assert!(next.is_assigned());
        assert!(next > repaired);
    }
}
