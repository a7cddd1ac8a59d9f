use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use super::{Reminder, ReminderId};
use crate::form::ReminderPayload;

/// On-disk layout: a list of `[[reminder]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default, rename = "reminder")]
    reminders: Vec<Reminder>,
}

/// Reminders backed by a single TOML file.
pub struct Store {
    path: PathBuf,
    reminders: Vec<Reminder>,
}

impl Store {
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("reminder-tui").join("reminders.toml"))
    }

    /// Load the store, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let reminders = if path.exists() {
            let content = fs::read_to_string(&path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            let file: StoreFile = toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
            file.reminders
        } else {
            Vec::new()
        };

        log::info!("Loaded {} reminders from {}", reminders.len(), path.display());

        let mut store = Self { path, reminders };
        store.sort();
        Ok(store)
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn next_id(&self) -> ReminderId {
        self.reminders.iter().map(|r| r.id).max().map_or(1, |id| id + 1)
    }

    /// Apply a submitted payload. Returns `true` when a new reminder was created.
    pub fn upsert(&mut self, payload: ReminderPayload) -> bool {
        let created = match self.reminders.iter_mut().find(|r| r.id == payload.id) {
            Some(existing) => {
                existing.apply(&payload);
                false
            }
            None => {
                self.reminders.push(Reminder::from(payload));
                true
            }
        };
        self.sort();
        created
    }

    pub fn delete(&mut self, id: ReminderId) -> Option<Reminder> {
        let index = self.reminders.iter().position(|r| r.id == id)?;
        Some(self.reminders.remove(index))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = StoreFile {
            reminders: self.reminders.clone(),
        };
        let content = toml::to_string_pretty(&file).wrap_err("Failed to serialize reminders")?;
        fs::write(&self.path, content)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Saved {} reminders to {}", self.reminders.len(), self.path.display());
        Ok(())
    }

    fn sort(&mut self) {
        self.reminders
            .sort_by(|a, b| a.schedule_key().cmp(&b.schedule_key()).then(a.id.cmp(&b.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: ReminderId, description: &str, date: &str, time: &str) -> ReminderPayload {
        ReminderPayload {
            id,
            description: description.to_string(),
            color: "red".to_string(),
            city: String::new(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("reminders.toml")).unwrap();
        assert!(store.reminders().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn saved_reminders_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reminders.toml");

        let mut store = Store::open(&path).unwrap();
        store.upsert(payload(1, "Call mom", "2024-01-01", "09:00"));
        let mut with_city = payload(2, "Umbrella", "2024-01-02", "08:00");
        with_city.city = "Tehran".to_string();
        store.upsert(with_city);
        store.save().unwrap();

        let reloaded = Store::open(&path).unwrap();
        assert_eq!(reloaded.reminders(), store.reminders());
        assert_eq!(reloaded.get(2).unwrap().city.as_deref(), Some("Tehran"));
        assert_eq!(reloaded.get(1).unwrap().city, None);
        assert_eq!(reloaded.next_id(), 3);
    }

    #[test]
    fn upsert_replaces_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("r.toml")).unwrap();

        assert!(store.upsert(payload(1, "Call mom", "2024-01-01", "09:00")));
        assert!(!store.upsert(payload(1, "Call mom now", "2024-01-01", "09:00")));

        assert_eq!(store.reminders().len(), 1);
        assert_eq!(store.get(1).unwrap().description, "Call mom now");
    }

    #[test]
    fn reminders_are_ordered_by_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("r.toml")).unwrap();
        store.upsert(payload(1, "late", "2024-01-02", "09:00"));
        store.upsert(payload(2, "early", "2024-01-01", "18:30"));
        store.upsert(payload(3, "earlier", "2024-01-01", "07:15"));

        let order: Vec<_> = store.reminders().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("r.toml")).unwrap();
        store.upsert(payload(1, "a", "2024-01-01", "09:00"));
        store.upsert(payload(2, "b", "2024-01-01", "10:00"));

        assert_eq!(store.delete(1).map(|r| r.id), Some(1));
        assert!(store.delete(1).is_none());
        assert_eq!(store.reminders().len(), 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.toml");
        fs::write(&path, "[[reminder]]\nid = \"not a number\"\n").unwrap();
        assert!(Store::open(&path).is_err());
    }
}
