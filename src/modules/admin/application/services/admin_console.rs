// src/modules/admin/application/services/admin_console.rs

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::modules::admin::application::domain::slug::unique_slug;
use crate::modules::admin::application::domain::{
    BlogPostForm, ProjectForm, RecordDraft, RecordKind, SessionState, TestimonialForm,
};
use crate::modules::admin::application::ports::incoming::{AdminSessionUseCase, LoginError};
use crate::modules::admin::application::ports::outgoing::{Confirmation, IdGenerator};
use crate::modules::content::application::content_store::CollectionOf;
use crate::modules::content::application::domain::{BlogPost, Project, Record, Testimonial};
use crate::modules::content::application::ContentStore;
use crate::modules::storage::application::ports::outgoing::StorageError;
use crate::modules::storage::application::{PersistedValue, StoreError, Update};
use crate::shared::validation::ValidationErrors;

pub const DELETE_PROMPT: &str = "¿Estás seguro de que quieres eliminar este elemento?";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("Admin session required")]
    NotAuthenticated,

    #[error("Invalid credential")]
    InvalidCredential,

    #[error("Session storage error: {0}")]
    Session(#[source] StorageError),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("No editor is open")]
    NoOpenEditor,

    #[error("No {kind} record with id '{id}'")]
    RecordNotFound { kind: RecordKind, id: String },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<LoginError> for AdminError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredential => AdminError::InvalidCredential,
            LoginError::Session(e) => AdminError::Session(e),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSummary {
    pub kind: RecordKind,
    pub title: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub heading: String,
    pub existing_id: Option<String>,
    pub draft: RecordDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub tabs: Vec<TabSummary>,
    pub active: RecordKind,
    pub rows: Vec<RecordRow>,
    pub editor: Option<EditorView>,
    pub unsaved_changes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum AdminView {
    Login { error: Option<String> },
    Dashboard(Dashboard),
}

//
// ──────────────────────────────────────────────────────────
// Collection helpers
// ──────────────────────────────────────────────────────────
//

fn rows<R: Record>(collection: &PersistedValue<Vec<R>>) -> Vec<RecordRow> {
    collection.with(|records| {
        records
            .iter()
            .map(|r| RecordRow {
                id: r.id().to_string(),
                label: r.label().to_string(),
            })
            .collect()
    })
}

fn contains<R: Record>(collection: &PersistedValue<Vec<R>>, id: &str) -> bool {
    collection.with(|records| records.iter().any(|r| r.id() == id))
}

fn find<R: Record>(collection: &PersistedValue<Vec<R>>, id: &str) -> Option<R> {
    collection.with(|records| records.iter().find(|r| r.id() == id).cloned())
}

fn append<R: Record>(collection: &PersistedValue<Vec<R>>, record: R) -> Result<(), StoreError> {
    collection.write(Update::apply(move |records: &Vec<R>| {
        let mut next = records.clone();
        next.push(record);
        next
    }))
}

/// Replace the record sharing `record`'s id, keeping its position.
fn replace<R: Record>(
    collection: &PersistedValue<Vec<R>>,
    kind: RecordKind,
    record: R,
) -> Result<(), AdminError> {
    if !contains(collection, record.id()) {
        return Err(AdminError::RecordNotFound {
            kind,
            id: record.id().to_string(),
        });
    }

    collection.write(Update::apply(move |records: &Vec<R>| {
        records
            .iter()
            .map(|r| {
                if r.id() == record.id() {
                    record.clone()
                } else {
                    r.clone()
                }
            })
            .collect()
    }))?;
    Ok(())
}

fn remove<R: Record>(collection: &PersistedValue<Vec<R>>, id: String) -> Result<(), StoreError> {
    collection.write(Update::apply(move |records: &Vec<R>| {
        records.iter().filter(|r| r.id() != id).cloned().collect()
    }))
}

//
// ──────────────────────────────────────────────────────────
// AdminConsole
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct Editor {
    existing_id: Option<String>,
    draft: RecordDraft,
}

type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Session-gated editor for the three content collections.
///
/// ## State
/// - `LoggedOut`: only [`login`](Self::login) does anything
/// - `LoggedIn`: one active tab, at most one open editor
///
/// Every mutation goes through the collection's `write`, so the content pages
/// see the change on their next render.
pub struct AdminConsole {
    store: Arc<ContentStore>,
    session: Arc<dyn AdminSessionUseCase>,
    ids: Arc<dyn IdGenerator>,
    confirmation: Arc<dyn Confirmation>,
    owner: String,
    today: Today,
    state: SessionState,
    tab: RecordKind,
    editor: Option<Editor>,
    login_error: Option<String>,
}

impl AdminConsole {
    pub fn new(
        store: Arc<ContentStore>,
        session: Arc<dyn AdminSessionUseCase>,
        ids: Arc<dyn IdGenerator>,
        confirmation: Arc<dyn Confirmation>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            store,
            session,
            ids,
            confirmation,
            owner: owner.into(),
            today: Arc::new(|| Local::now().date_naive()),
            state: SessionState::LoggedOut,
            tab: RecordKind::Projects,
            editor: None,
            login_error: None,
        }
    }

    /// Override the date used to prefill new blog posts.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Arc::new(today);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_tab(&self) -> RecordKind {
        self.tab
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    fn require_login(&self) -> Result<(), AdminError> {
        match self.state {
            SessionState::LoggedIn => Ok(()),
            SessionState::LoggedOut => Err(AdminError::NotAuthenticated),
        }
    }

    // ---------------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------------

    /// Sync with the session flag. Called when the admin page is entered.
    pub fn restore_session(&mut self) -> SessionState {
        self.state = if self.session.is_logged_in() {
            SessionState::LoggedIn
        } else {
            self.editor = None;
            SessionState::LoggedOut
        };
        self.state
    }

    pub fn login(&mut self, password: &str) -> Result<(), AdminError> {
        match self.session.login(password) {
            Ok(()) => {
                self.state = SessionState::LoggedIn;
                self.login_error = None;
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::LoggedOut;
                self.login_error = Some(e.user_message().to_string());
                Err(e.into())
            }
        }
    }

    /// Always ends the in-page session. An error means the flag may still be
    /// in session storage and the next load could restore the login.
    pub fn logout(&mut self) -> Result<(), AdminError> {
        self.state = SessionState::LoggedOut;
        self.editor = None;
        self.login_error = None;
        self.session.logout().map_err(AdminError::Session)
    }

    // ---------------------------------------------------------------------
    // Tabs and listing
    // ---------------------------------------------------------------------

    /// Switch tabs; any open editor is discarded.
    pub fn select_tab(&mut self, kind: RecordKind) {
        if self.tab != kind {
            self.editor = None;
        }
        self.tab = kind;
    }

    pub fn list(&self, kind: RecordKind) -> Vec<RecordRow> {
        match kind {
            RecordKind::Projects => rows(self.store.projects()),
            RecordKind::Testimonials => rows(self.store.testimonials()),
            RecordKind::Blog => rows(self.store.blog_posts()),
        }
    }

    fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Projects => self.store.projects().with(Vec::len),
            RecordKind::Testimonials => self.store.testimonials().with(Vec::len),
            RecordKind::Blog => self.store.blog_posts().with(Vec::len),
        }
    }

    pub fn view(&self) -> AdminView {
        if self.state == SessionState::LoggedOut {
            return AdminView::Login {
                error: self.login_error.clone(),
            };
        }

        let tabs = RecordKind::ALL
            .iter()
            .map(|&kind| TabSummary {
                kind,
                title: kind.title(),
                count: self.count(kind),
                active: kind == self.tab,
            })
            .collect();

        let editor = self.editor.as_ref().map(|editor| {
            let verb = if editor.existing_id.is_some() {
                "Editar"
            } else {
                "Añadir"
            };
            EditorView {
                heading: format!("{} {}", verb, editor.draft.kind().singular()),
                existing_id: editor.existing_id.clone(),
                draft: editor.draft.clone(),
            }
        });

        AdminView::Dashboard(Dashboard {
            tabs,
            active: self.tab,
            rows: self.list(self.tab),
            editor,
            unsaved_changes: self.store.has_unsaved_changes(),
        })
    }

    // ---------------------------------------------------------------------
    // Editor
    // ---------------------------------------------------------------------

    /// Open a blank form for the active tab.
    pub fn open_new(&mut self) -> Result<&mut RecordDraft, AdminError> {
        self.require_login()?;

        let draft = RecordDraft::blank(self.tab, &self.owner, (self.today)());
        let editor = self.editor.insert(Editor {
            existing_id: None,
            draft,
        });
        Ok(&mut editor.draft)
    }

    /// Load the record `id` of the active tab into the editor.
    pub fn open_existing(&mut self, id: &str) -> Result<&mut RecordDraft, AdminError> {
        self.require_login()?;

        let draft = match self.tab {
            RecordKind::Projects => find::<Project>(self.store.projects(), id)
                .map(|p| RecordDraft::Project(ProjectForm::from_record(&p))),
            RecordKind::Testimonials => find::<Testimonial>(self.store.testimonials(), id)
                .map(|t| RecordDraft::Testimonial(TestimonialForm::from_record(&t))),
            RecordKind::Blog => find::<BlogPost>(self.store.blog_posts(), id)
                .map(|p| RecordDraft::BlogPost(BlogPostForm::from_record(&p))),
        }
        .ok_or_else(|| AdminError::RecordNotFound {
            kind: self.tab,
            id: id.to_string(),
        })?;

        let editor = self.editor.insert(Editor {
            existing_id: Some(id.to_string()),
            draft,
        });
        Ok(&mut editor.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut RecordDraft> {
        self.editor.as_mut().map(|editor| &mut editor.draft)
    }

    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Validate and store the open form. Returns the id of the saved record.
    ///
    /// The editor closes once the change is applied, including when storage
    /// refused it and the change only lives in memory.
    pub fn save(&mut self) -> Result<String, AdminError> {
        self.require_login()?;
        let editor = self.editor.as_ref().ok_or(AdminError::NoOpenEditor)?;
        editor.draft.validate()?;

        let (id, is_new) = match (&editor.existing_id, &editor.draft) {
            (Some(id), _) => (id.clone(), false),
            (None, RecordDraft::BlogPost(form)) => {
                let slug = unique_slug(&form.title, |candidate| {
                    contains(self.store.blog_posts(), candidate)
                });
                (slug, true)
            }
            (None, _) => (self.ids.next_id(), true),
        };

        let result = match &editor.draft {
            RecordDraft::Project(form) => {
                self.store_record(RecordKind::Projects, form.build(id.clone()), is_new)
            }
            RecordDraft::Testimonial(form) => {
                self.store_record(RecordKind::Testimonials, form.build(id.clone()), is_new)
            }
            RecordDraft::BlogPost(form) => {
                self.store_record(RecordKind::Blog, form.build(id.clone()), is_new)
            }
        };

        match result {
            Ok(()) => {
                self.editor = None;
                Ok(id)
            }
            Err(AdminError::Storage(e)) => {
                warn!(id = %id, "Record saved in memory only: {}", e);
                self.editor = None;
                Err(AdminError::Storage(e))
            }
            Err(e) => Err(e),
        }
    }

    fn store_record<R>(&self, kind: RecordKind, record: R, is_new: bool) -> Result<(), AdminError>
    where
        R: Record,
        ContentStore: CollectionOf<R>,
    {
        let collection = <ContentStore as CollectionOf<R>>::collection(&self.store);
        let id = record.id().to_string();

        if is_new {
            append(collection, record)?;
            info!(kind = %kind, id = %id, "Record created");
        } else {
            replace(collection, kind, record)?;
            info!(kind = %kind, id = %id, "Record updated");
        }
        Ok(())
    }

    /// Delete `id` from the active tab after the operator confirms.
    pub fn delete(&mut self, id: &str) -> Result<DeleteOutcome, AdminError> {
        self.require_login()?;

        let kind = self.tab;
        let exists = match kind {
            RecordKind::Projects => contains(self.store.projects(), id),
            RecordKind::Testimonials => contains(self.store.testimonials(), id),
            RecordKind::Blog => contains(self.store.blog_posts(), id),
        };
        if !exists {
            return Err(AdminError::RecordNotFound {
                kind,
                id: id.to_string(),
            });
        }

        if !self.confirmation.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let owned = id.to_string();
        match kind {
            RecordKind::Projects => remove(self.store.projects(), owned),
            RecordKind::Testimonials => remove(self.store.testimonials(), owned),
            RecordKind::Blog => remove(self.store.blog_posts(), owned),
        }?;

        if self
            .editor
            .as_ref()
            .is_some_and(|editor| editor.existing_id.as_deref() == Some(id))
        {
            self.editor = None;
        }

        info!(kind = %kind, id = %id, "Record deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

impl fmt::Debug for AdminConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConsole")
            .field("owner", &self.owner)
            .field("state", &self.state)
            .field("tab", &self.tab)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}
