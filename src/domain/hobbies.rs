//! Hobbies - Dynamic List of Hobby Entries
//!
//! Entries live in an arena keyed by `HobbyId`; the visible order is a separate
//! list of ids. Ids come from a counter owned by the list and are never reused,
//! so a row keeps its identity while neighbours are added or removed.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use snafu::ensure;
use tracing::debug;

use crate::error::{
    Error, HobbyIndexOutOfRangeSnafu, HobbyPinnedSnafu, LastHobbySnafu, Result,
};

/// Stable identifier of a hobby entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HobbyId(u64);

impl fmt::Display for HobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single hobby row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HobbyEntry {
    id: HobbyId,
    /// User-entered hobby name
    pub name: String,
}

impl HobbyEntry {
    /// Identifier of this entry
    pub fn id(&self) -> HobbyId {
        self.id
    }

    /// Current name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Whether the first hobby row may be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstEntryPolicy {
    /// Index 0 never offers removal
    #[default]
    Pinned,
    /// Any row may be removed while more than one remains
    Removable,
}

/// Result of an append request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// A new blank entry was added at the end
    Appended(HobbyId),
    /// A blank entry already exists; nothing changed
    Ignored,
}

/// Ordered hobby entries with stable ids
#[derive(Debug, Clone)]
pub struct HobbyList {
    entries: AHashMap<HobbyId, HobbyEntry>,
    order: Vec<HobbyId>,
    next_id: u64,
    policy: FirstEntryPolicy,
}

impl HobbyList {
    /// Create a list holding a single blank entry
    pub fn new(policy: FirstEntryPolicy) -> Self {
        let mut list = Self {
            entries: AHashMap::new(),
            order: Vec::new(),
            next_id: 1,
            policy,
        };
        list.push_entry(String::new());
        list
    }

    /// Create a list from names. An empty iterator still yields one blank entry.
    pub fn from_names<I, S>(policy: FirstEntryPolicy, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            entries: AHashMap::new(),
            order: Vec::new(),
            next_id: 1,
            policy,
        };
        for name in names {
            list.push_entry(name.into());
        }
        if list.order.is_empty() {
            list.push_entry(String::new());
        }
        list
    }

    fn push_entry(&mut self, name: String) -> HobbyId {
        let id = HobbyId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, HobbyEntry { id, name });
        self.order.push(id);
        id
    }

    /// Current removal policy
    pub fn policy(&self) -> FirstEntryPolicy {
        self.policy
    }

    /// Change the removal policy
    pub fn set_policy(&mut self, policy: FirstEntryPolicy) {
        self.policy = policy;
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false while the one-entry invariant holds
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in display order
    pub fn ids(&self) -> &[HobbyId] {
        &self.order
    }

    /// Entry at a position
    pub fn get(&self, index: usize) -> Option<&HobbyEntry> {
        self.order.get(index).and_then(|id| self.entries.get(id))
    }

    /// Entry by id
    pub fn get_by_id(&self, id: HobbyId) -> Option<&HobbyEntry> {
        self.entries.get(&id)
    }

    /// Current position of an id
    pub fn position(&self, id: HobbyId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &HobbyEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Whether any entry is blank after trimming
    pub fn has_blank(&self) -> bool {
        self.iter().any(HobbyEntry::is_blank)
    }

    /// Whether `append` would add an entry
    pub fn can_append(&self) -> bool {
        !self.has_blank()
    }

    /// Append a blank entry unless a blank one already exists
    pub fn append(&mut self) -> AppendOutcome {
        if !self.can_append() {
            debug!("Append ignored: a blank hobby already exists");
            return AppendOutcome::Ignored;
        }
        AppendOutcome::Appended(self.push_entry(String::new()))
    }

    /// Whether `remove(index)` would succeed
    pub fn can_remove(&self, index: usize) -> bool {
        index < self.len()
            && self.len() > 1
            && !(index == 0 && self.policy == FirstEntryPolicy::Pinned)
    }

    /// Remove the entry at `index`, shifting later entries forward
    pub fn remove(&mut self, index: usize) -> Result<HobbyEntry> {
        let len = self.len();
        ensure!(index < len, HobbyIndexOutOfRangeSnafu { index, len });
        ensure!(
            !(index == 0 && self.policy == FirstEntryPolicy::Pinned),
            HobbyPinnedSnafu { index }
        );
        ensure!(len > 1, LastHobbySnafu);

        let id = self.order.remove(index);
        self.entries.remove(&id).ok_or_else(|| Error::Invalid {
            message: format!("hobby {id} missing from arena"),
        })
    }

    /// Replace the name at `index`
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let len = self.len();
        let id = *self
            .order
            .get(index)
            .ok_or(Error::HobbyIndexOutOfRange { index, len })?;
        self.set_name_by_id(id, name)
    }

    /// Replace the name of the entry with `id`
    pub fn set_name_by_id(&mut self, id: HobbyId, name: impl Into<String>) -> Result<()> {
        let entry = self.entries.get_mut(&id).ok_or_else(|| Error::Invalid {
            message: format!("unknown hobby id {id}"),
        })?;
        entry.name = name.into();
        Ok(())
    }
}

impl Default for HobbyList {
    fn default() -> Self {
        Self::new(FirstEntryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &HobbyList) -> Vec<&str> {
        list.iter().map(HobbyEntry::name).collect()
    }

    #[test]
    fn test_new_list_has_one_blank_entry() {
        let list = HobbyList::default();
        assert_eq!(list.len(), 1);
        assert!(list.has_blank());
        assert!(!list.can_append());
    }

    #[test]
    fn test_append_ignored_while_blank_exists() {
        let mut list = HobbyList::default();
        assert_eq!(list.append(), AppendOutcome::Ignored);
        assert_eq!(list.len(), 1);

        list.set_name(0, "   ").expect("set name");
        assert_eq!(list.append(), AppendOutcome::Ignored);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_append_after_filling_last_entry() {
        let mut list = HobbyList::default();
        list.set_name(0, "chess").expect("set name");

        let AppendOutcome::Appended(id) = list.append() else {
            panic!("append should succeed");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list.position(id), Some(1));
        assert!(list.get(1).expect("entry").is_blank());
    }

    #[test]
    fn test_append_ignored_when_earlier_entry_blank() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["chess", "go"]);
        list.set_name(0, "").expect("set name");
        assert_eq!(list.append(), AppendOutcome::Ignored);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_shifts_and_keeps_ids() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["a", "b", "c", "d"]);
        let before: Vec<HobbyId> = list.ids().to_vec();

        let removed = list.remove(1).expect("remove");
        assert_eq!(removed.name(), "b");
        assert_eq!(list.len(), 3);
        assert_eq!(names(&list), vec!["a", "c", "d"]);
        assert_eq!(list.ids(), &[before[0], before[2], before[3]]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["a", "b"]);
        let removed = list.remove(1).expect("remove");

        let AppendOutcome::Appended(id) = list.append() else {
            panic!("append should succeed");
        };
        assert_ne!(id, removed.id());
        assert!(id > removed.id());
    }

    #[test]
    fn test_first_entry_pinned() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["a", "b"]);
        assert!(!list.can_remove(0));
        assert!(matches!(list.remove(0), Err(Error::HobbyPinned { index: 0 })));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_first_entry_removable_policy() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Removable, ["a", "b"]);
        assert!(list.can_remove(0));
        let removed = list.remove(0).expect("remove");
        assert_eq!(removed.name(), "a");
        assert_eq!(names(&list), vec!["b"]);
    }

    #[test]
    fn test_last_entry_never_removed() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Removable, ["only"]);
        assert!(!list.can_remove(0));
        assert!(matches!(list.remove(0), Err(Error::LastHobby)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["a", "b"]);
        assert!(matches!(
            list.remove(5),
            Err(Error::HobbyIndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_from_empty_names_keeps_one_entry() {
        let list = HobbyList::from_names(FirstEntryPolicy::Pinned, Vec::<String>::new());
        assert_eq!(list.len(), 1);
        assert!(list.has_blank());
    }

    #[test]
    fn test_set_name_by_id_follows_moves() {
        let mut list = HobbyList::from_names(FirstEntryPolicy::Pinned, ["a", "b", "c"]);
        let id_c = list.ids()[2];
        list.remove(1).expect("remove");
        list.set_name_by_id(id_c, "chess").expect("set name");
        assert_eq!(list.get(1).expect("entry").name(), "chess");
    }
}
