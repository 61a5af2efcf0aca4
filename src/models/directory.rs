//! Contact directory: every contact in the session, keyed by name.

use super::record::ContactRecord;
use crate::error::{BookError, BookResult};
use indexmap::IndexMap;
use tracing::debug;

/// The full set of contacts, keyed by contact name.
///
/// Each key equals the name of the record stored under it. Entries are kept
/// in insertion order so that listings are stable across a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: IndexMap<String, ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name.
    ///
    /// A record already stored under that name is replaced and returned;
    /// its position in the listing order is kept.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key, record);
        debug!(replaced = previous.is_some(), "Stored contact record");
        previous
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Append a phone to the record stored under `name`.
    ///
    /// Records are never handed out mutably, so a stored record cannot be
    /// swapped for one with a different name.
    pub fn add_phone(&mut self, name: &str, value: impl Into<String>) -> BookResult<()> {
        Ok(self.record_mut(name)?.add_phone(value)?)
    }

    /// Replace `old` with `new` on the record stored under `name`.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        self.record_mut(name)?.edit_phone(old, new)
    }

    /// Remove `value` from the record stored under `name`.
    pub fn remove_phone(&mut self, name: &str, value: &str) -> BookResult<String> {
        self.record_mut(name)?.remove_phone(value)
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<String> {
        // shift_remove keeps the order of the remaining entries
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

        debug!(name, "Deleted contact record");
        Ok(format!("Record for {} deleted.", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = (&'a String, &'a ContactRecord);
    type IntoIter = indexmap::map::Iter<'a, String, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record(name: &str, phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = ContactDirectory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert_eq!(directory.iter().count(), 0);
    }

    #[test]
    fn test_add_and_find() {
        let mut directory = ContactDirectory::new();
        assert!(directory.add_record(record("Alice", &["0123456789"])).is_none());

        let found = directory.find("Alice").unwrap();
        assert_eq!(found.name().as_str(), "Alice");
        assert!(directory.contains("Alice"));
        assert!(directory.find("Bob").is_none());
    }

    #[test]
    fn test_add_same_name_replaces_record() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &["0123456789"]));

        let previous = directory
            .add_record(record("Alice", &["1111111111"]))
            .unwrap();

        assert_eq!(previous.phones()[0].as_str(), "0123456789");
        assert_eq!(directory.len(), 1);
        assert_eq!(
            directory.find("Alice").unwrap().phones()[0].as_str(),
            "1111111111"
        );
    }

    #[test]
    fn test_keys_match_record_names() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &[]));
        directory.add_record(record("Bob", &[]));

        for (name, record) in directory.iter() {
            assert_eq!(name, record.name().as_str());
        }
    }

    #[test]
    fn test_phone_mutators_edit_in_place() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &["0123456789"]));

        directory.add_phone("Alice", "1111111111").unwrap();
        let outcome = directory
            .edit_phone("Alice", "0123456789", "0987654321")
            .unwrap();
        assert_eq!(outcome, "Phone 0123456789 changed to 0987654321.");
        directory.remove_phone("Alice", "1111111111").unwrap();

        let alice = directory.find("Alice").unwrap();
        assert!(alice.find_phone("0987654321").is_some());
        assert!(alice.find_phone("0123456789").is_none());
        assert_eq!(alice.phones().len(), 1);
    }

    #[test]
    fn test_phone_mutators_on_missing_record() {
        let mut directory = ContactDirectory::new();
        let missing = BookError::RecordNotFound("Zed".to_string());

        assert_eq!(directory.add_phone("Zed", "0123456789"), Err(missing.clone()));
        assert_eq!(
            directory.edit_phone("Zed", "0123456789", "0987654321"),
            Err(missing.clone())
        );
        assert_eq!(directory.remove_phone("Zed", "0123456789"), Err(missing));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &["0123456789"]));

        assert_eq!(
            directory.add_phone("Alice", "12345"),
            Err(BookError::Validation(ValidationError::InvalidPhone(
                "12345".to_string()
            )))
        );
        assert_eq!(directory.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_mutations_by_name_keep_keys_matching_names() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &["0123456789"]));
        directory.add_record(record("Mallory", &[]));

        // the only way to store a differently named record is add_record,
        // which keys it by its own name
        directory.add_phone("Alice", "1111111111").unwrap();
        directory
            .edit_phone("Alice", "0123456789", "2222222222")
            .unwrap();
        directory.remove_phone("Alice", "1111111111").unwrap();
        directory.add_record(record("Mallory", &["3333333333"]));

        assert_eq!(directory.len(), 2);
        for (name, record) in directory.iter() {
            assert_eq!(name, record.name().as_str());
        }
        assert_eq!(directory.find("Alice").unwrap().name().as_str(), "Alice");
    }

    #[test]
    fn test_delete() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &[]));

        let outcome = directory.delete("Alice").unwrap();
        assert_eq!(outcome, "Record for Alice deleted.");
        assert!(directory.find("Alice").is_none());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_delete_missing() {
        let mut directory = ContactDirectory::new();
        directory.add_record(record("Alice", &[]));

        let err = directory.delete("Bob").unwrap_err();
        assert_eq!(err, BookError::RecordNotFound("Bob".to_string()));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut directory = ContactDirectory::new();
        for name in ["Carol", "Alice", "Bob", "Dave"] {
            directory.add_record(record(name, &[]));
        }
        directory.delete("Alice").unwrap();

        let names: Vec<&str> = directory.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Dave"]);

        let borrowed: Vec<&String> = (&directory).into_iter().map(|(name, _)| name).collect();
        assert_eq!(borrowed.len(), 3);
    }
}
