use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    models::Note,
    repository::Repository,
};

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    /// The payload had no usable `content` field.
    #[error("content missing")]
    ContentMissing,
    /// The id targeted by a replace does not exist.
    #[error("note not found")]
    NotFound,
}

/// Answers note requests against the shared in-memory collection. Every
/// read-modify-write sequence, id generation included, runs under the
/// single mutex, so concurrent creates cannot observe a stale maximum id.
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
}

impl NoteService {
    pub const fn new(repo: Arc<tokio::sync::Mutex<Repository>>) -> Self {
        Self { repo }
    }

    pub async fn get_all_notes(&self) -> Vec<NoteResponse> {
        self.repo
            .lock()
            .await
            .get_all_notes()
            .into_iter()
            .map(NoteResponse::from)
            .collect()
    }

    pub async fn get_one_note(&self, id: i64) -> Option<NoteResponse> {
        self.repo
            .lock()
            .await
            .get_one_note(id)
            .map(NoteResponse::from)
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<NoteResponse, NoteError> {
        let content = validated_content(request.content)?;
        let important = request.important.unwrap_or(false);

        let note = self.repo.lock().await.create_note(content, important);

        Ok(NoteResponse::from(note))
    }

    pub async fn replace_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, NoteError> {
        // Content validation comes first, so a bad payload aimed at a
        // missing id reports 400 rather than 404.
        let content = validated_content(request.content)?;
        let important = request.important.unwrap_or(false);

        self.repo
            .lock()
            .await
            .replace_note(id, content, important)
            .map(NoteResponse::from)
            .ok_or(NoteError::NotFound)
    }

    pub async fn delete_note(&self, id: i64) -> bool {
        self.repo.lock().await.delete_note(id)
    }
}

fn validated_content(content: Option<String>) -> Result<String, NoteError> {
    match content {
        Some(content) if !content.is_empty() => Ok(content),
        _ => Err(NoteError::ContentMissing),
    }
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            important: note.important,
        }
    }
}
