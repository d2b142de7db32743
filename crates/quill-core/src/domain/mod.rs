//! Domain entities - the blog post record and its rules.

mod post;
mod validation;

pub use post::{Author, BlogPost, PostDraft, to_public_view};
pub use validation::{validate_for_create, validate_for_update};
