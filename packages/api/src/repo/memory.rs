use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::{NoteRepository, StoreError};
use crate::models::{Note, NoteDraft, NoteId};

/// In-memory NoteRepository for tests and running without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryNoteRepository {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
    last_write: Option<DateTime<Utc>>,
}

impl Inner {
    // Strictly increasing, so list order matches write order even when two
    // writes land within the clock's resolution.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_write {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_write = Some(stamp);
        stamp
    }
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut notes: Vec<Note> = inner.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(self.inner.lock().unwrap().notes.get(&id).cloned())
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let now = inner.tick();
        let note = Note {
            id: inner.next_id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.notes.contains_key(&id) {
            return Ok(None);
        }
        let now = inner.tick();
        let note = inner.notes.get_mut(&id).map(|note| {
            note.title = draft.title.clone();
            note.content = draft.content.clone();
            note.updated_at = now;
            note.clone()
        });
        Ok(note)
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().notes.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = MemoryNoteRepository::new();

        // Initially empty
        assert!(repo.list().await.unwrap().is_empty());

        let note = repo.create(&NoteDraft::new("Groceries", "")).await.unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(note.created_at, note.updated_at);

        let fetched = repo.get(1).await.unwrap().unwrap();
        assert_eq!(fetched, note);
        assert!(repo.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = MemoryNoteRepository::new();
        let first = repo.create(&NoteDraft::new("a", "")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(&NoteDraft::new("b", "")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = MemoryNoteRepository::new();
        let note = repo.create(&NoteDraft::new("Groceries", "eggs")).await.unwrap();

        let updated = repo
            .update(note.id, &NoteDraft::new("Groceries v2", "milk"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Groceries v2");
        assert_eq!(updated.content, "milk");
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at > note.updated_at);

        assert!(repo.update(99, &NoteDraft::new("x", "")).await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryNoteRepository::new();
        let note = repo.create(&NoteDraft::new("Temporary", "")).await.unwrap();

        assert!(repo.delete(note.id).await.unwrap());
        assert!(!repo.delete(note.id).await.unwrap());
        assert!(repo.get(note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_most_recently_updated_first() {
        let repo = MemoryNoteRepository::new();
        let a = repo.create(&NoteDraft::new("a", "")).await.unwrap();
        let b = repo.create(&NoteDraft::new("b", "")).await.unwrap();
        let c = repo.create(&NoteDraft::new("c", "")).await.unwrap();

        let ids: Vec<NoteId> = repo.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);

        repo.update(a.id, &NoteDraft::new("a2", "")).await.unwrap();
        let ids: Vec<NoteId> = repo.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a.id, c.id, b.id]);
    }
}
