pub mod forms;
pub mod record_kind;
pub mod session;
pub mod slug;
pub mod tags;

pub use forms::{BlogPostForm, ProjectForm, RecordDraft, TestimonialForm};
pub use record_kind::RecordKind;
pub use session::{SessionState, SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
