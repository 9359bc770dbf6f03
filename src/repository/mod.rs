use crate::models::Note;

/// In-memory note store. The collection lives for the lifetime of the
/// process and is seeded with a fixed set of notes at startup.
pub struct Repository {
    notes: Vec<Note>,
}

impl Repository {
    pub fn new() -> Self {
        Self::with_notes(vec![
            Note {
                id: 1,
                content: "HTML is easy".to_string(),
                important: true,
            },
            Note {
                id: 2,
                content: "Browser can execute only JavaScript".to_string(),
                important: false,
            },
            Note {
                id: 3,
                content: "GET and POSt are the most imporant methods of HTTP protocol".to_string(),
                important: true,
            },
        ])
    }

    pub const fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    // New ids are one past the current maximum, so a fresh id is always
    // strictly greater than every id present at the time of the call.
    fn next_id(&self) -> i64 {
        self.notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
    }

    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get_one_note(&self, id: i64) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    pub fn create_note(&mut self, content: String, important: bool) -> Note {
        let note = Note {
            id: self.next_id(),
            content,
            important,
        };
        self.notes.push(note.clone());
        note
    }

    /// Replaces the note with the given id in place, keeping its position
    /// in the collection. Returns `None` when no note has that id.
    pub fn replace_note(&mut self, id: i64, content: String, important: bool) -> Option<Note> {
        let slot = self.notes.iter_mut().find(|note| note.id == id)?;
        *slot = Note {
            id,
            content,
            important,
        };
        Some(slot.clone())
    }

    /// Removes the note with the given id. Returns whether a note was
    /// actually removed; deleting an absent id is not an error.
    pub fn delete_note(&mut self, id: i64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_three_notes_in_order() {
        let repo = Repository::new();
        let notes = repo.get_all_notes();

        assert_eq!(notes.len(), 3);
        assert_eq!(
            notes.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(notes[1].content, "Browser can execute only JavaScript");
        assert!(!notes[1].important);
    }

    #[test]
    fn create_assigns_max_id_plus_one() {
        let mut repo = Repository::new();

        let note = repo.create_note("test".to_string(), false);

        assert_eq!(note.id, 4);
        assert_eq!(repo.get_all_notes().last(), Some(&note));
    }

    #[test]
    fn create_on_empty_collection_starts_at_one() {
        let mut repo = Repository::with_notes(Vec::new());

        let note = repo.create_note("first".to_string(), true);

        assert_eq!(note.id, 1);
    }

    #[test]
    fn created_id_exceeds_every_existing_id() {
        let mut repo = Repository::new();
        repo.delete_note(2);
        let max_before = repo
            .get_all_notes()
            .iter()
            .map(|n| n.id)
            .max()
            .unwrap_or(0);

        let note = repo.create_note("later".to_string(), false);

        assert!(note.id > max_before);
    }

    #[test]
    fn replace_keeps_position_and_id() {
        let mut repo = Repository::new();

        let updated = repo.replace_note(2, "updated".to_string(), true);

        assert_eq!(
            updated,
            Some(Note {
                id: 2,
                content: "updated".to_string(),
                important: true,
            })
        );
        let notes = repo.get_all_notes();
        assert_eq!(notes[1].id, 2);
        assert_eq!(notes[1].content, "updated");
    }

    #[test]
    fn replace_missing_note_returns_none() {
        let mut repo = Repository::new();

        assert_eq!(repo.replace_note(9999, "nope".to_string(), false), None);
        assert_eq!(repo.get_all_notes().len(), 3);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut repo = Repository::new();

        assert!(repo.delete_note(1));
        assert!(!repo.delete_note(1));
        assert_eq!(repo.get_all_notes().len(), 2);
    }
}
