use crate::{
    dto::{EditForm, NoteForm, NoteView},
    store::{NoteStore, StoreError},
};

/// Application layer between the page handlers and the store: forwards
/// the five operations and converts rows into render-ready views.
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    pub const fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub async fn list_notes(&self) -> Result<Vec<NoteView>, StoreError> {
        self.store
            .list_all()
            .await
            .map(|notes| notes.iter().map(NoteView::from_model).collect())
    }

    pub async fn get_note(&self, id: i64) -> Result<NoteView, StoreError> {
        self.store
            .get_by_id(id)
            .await
            .map(|note| NoteView::from_model(&note))
    }

    pub async fn create_note(&self, form: NoteForm) -> Result<NoteView, StoreError> {
        self.store
            .create(form.title, form.body)
            .await
            .map(|note| NoteView::from_model(&note))
    }

    pub async fn update_note(&self, form: EditForm) -> Result<NoteView, StoreError> {
        self.store
            .update(form.id, form.title, form.body)
            .await
            .map(|note| NoteView::from_model(&note))
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete(id).await
    }
}
