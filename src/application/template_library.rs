// SPDX-License-Identifier: MPL-2.0
//! Prompt template collection backed by a [`KeyValueStore`].
//!
//! # Lifecycle
//!
//! - [`TemplateLibrary::load`] reads the single storage entry at startup and
//!   falls back to the built-in set when it is missing or corrupt
//! - [`TemplateLibrary::add`] inserts at the front and flushes the whole
//!   collection
//!
//! A failed flush never undoes the in-memory insert: the template stays
//! visible for the session and the caller gets a warning to show.

use super::port::storage::{KeyValueStore, StorageError};
use crate::config::defaults::TEMPLATE_STORAGE_KEY;
use crate::domain::template::{default_templates, PromptTemplate, TemplateId};

/// Shown when the collection did not fit in storage.
pub const QUOTA_WARNING: &str = "Storage limit reached! Could not save the prompt permanently. Try deleting some or using smaller images.";

/// Shown when the collection could not be written for any other reason.
pub const STORAGE_WRITE_WARNING: &str = "Could not save the prompt permanently. It stays available until you close the app.";

/// Shown when stored templates could not be parsed.
pub const CORRUPT_WARNING: &str = "Saved templates could not be read; the default set is shown instead.";

pub struct TemplateLibrary<S> {
    store: S,
    templates: Vec<PromptTemplate>,
}

impl<S: KeyValueStore> TemplateLibrary<S> {
    /// Loads the collection from `store`.
    ///
    /// Returns the library and an optional warning for the user. Missing data
    /// is not worth a warning; unreadable or corrupt data is.
    pub fn load(store: S) -> (Self, Option<String>) {
        let (templates, warning) = match store.get(TEMPLATE_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<PromptTemplate>>(&raw) {
                Ok(templates) => (templates, None),
                Err(err) => {
                    tracing::warn!(%err, "stored templates are corrupt, using defaults");
                    (default_templates(), Some(CORRUPT_WARNING.to_string()))
                }
            },
            Ok(None) => (default_templates(), None),
            Err(err) => {
                tracing::warn!(%err, "template storage unreadable, using defaults");
                (default_templates(), Some(CORRUPT_WARNING.to_string()))
            }
        };

        tracing::debug!(count = templates.len(), "templates loaded");
        (Self { store, templates }, warning)
    }

    /// Templates, most recently added first.
    #[must_use]
    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn get(&self, id: &TemplateId) -> Option<&PromptTemplate> {
        self.templates.iter().find(|template| &template.id == id)
    }

    /// Templates whose title or prompt contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PromptTemplate> {
        self.templates
            .iter()
            .filter(|template| template.matches(query))
            .collect()
    }

    /// Inserts `template` at the front and persists the collection.
    ///
    /// Returns a user-facing warning when the write failed.
    pub fn add(&mut self, template: PromptTemplate) -> Option<String> {
        tracing::info!(id = %template.id, title = %template.title, "template added");
        self.templates.insert(0, template);
        match self.flush() {
            Ok(()) => None,
            Err(StorageError::QuotaExceeded { required, quota }) => {
                tracing::warn!(required, quota, "template storage quota exceeded");
                Some(QUOTA_WARNING.to_string())
            }
            Err(err) => {
                tracing::warn!(%err, "failed to persist templates");
                Some(STORAGE_WRITE_WARNING.to_string())
            }
        }
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.templates)
            .map_err(|err| StorageError::Io(err.to_string()))?;
        self.store.set(TEMPLATE_STORAGE_KEY, &serialized)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Gives the backing store back, e.g. to reload it.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateDraft;
    use crate::infrastructure::storage::MemoryStore;

    fn template(title: &str) -> PromptTemplate {
        TemplateDraft {
            title: title.to_string(),
            prompt: format!("{title} prompt"),
            preview_image: Some("data:image/jpeg;base64,AAAA".to_string()),
        }
        .into_template()
        .expect("valid draft")
    }

    #[test]
    fn empty_store_loads_defaults_without_warning() {
        let (library, warning) = TemplateLibrary::load(MemoryStore::new());
        assert!(warning.is_none());
        assert_eq!(library.templates(), default_templates().as_slice());
    }

    #[test]
    fn corrupt_store_loads_defaults_with_warning() {
        let mut store = MemoryStore::new();
        store.set(TEMPLATE_STORAGE_KEY, "{not json").unwrap();

        let (library, warning) = TemplateLibrary::load(store);
        assert_eq!(warning.as_deref(), Some(CORRUPT_WARNING));
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn add_inserts_at_front_and_persists() {
        let (mut library, _) = TemplateLibrary::load(MemoryStore::new());
        assert!(library.add(template("Noir")).is_none());
        assert!(library.add(template("Pastel")).is_none());
        assert_eq!(library.templates()[0].title, "Pastel");
        assert_eq!(library.templates()[1].title, "Noir");

        let (reloaded, warning) = TemplateLibrary::load(library.into_store());
        assert!(warning.is_none());
        assert_eq!(reloaded.len(), 5);
        assert_eq!(reloaded.templates()[0].title, "Pastel");
    }

    #[test]
    fn quota_failure_warns_but_keeps_template_in_memory() {
        let (mut library, _) = TemplateLibrary::load(MemoryStore::with_quota(64));
        let added = template("Huge");
        let id = added.id.clone();

        let warning = library.add(added);

        assert_eq!(warning.as_deref(), Some(QUOTA_WARNING));
        assert!(library.get(&id).is_some());
        assert_eq!(library.len(), 4);
    }

    /// Reads fine, refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only file system".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn io_failure_warns_without_blaming_quota() {
        let (mut library, _) = TemplateLibrary::load(ReadOnlyStore);
        let added = template("Sketch");
        let id = added.id.clone();

        let warning = library.add(added);

        assert_eq!(warning.as_deref(), Some(STORAGE_WRITE_WARNING));
        assert!(library.get(&id).is_some());
        assert_eq!(library.templates()[0].title, "Sketch");
    }

    #[test]
    fn search_filters_by_title_and_prompt() {
        let (mut library, _) = TemplateLibrary::load(MemoryStore::new());
        library.add(template("Noir"));

        let hits = library.search("noir");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Noir");

        assert_eq!(library.search("brush strokes").len(), 1);
        assert_eq!(library.search("").len(), 4);
        assert!(library.search("nothing like this").is_empty());
    }
}
