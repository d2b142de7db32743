//! # Quill Shared
//!
//! Wire types shared by the API server and its clients.
//! Nothing in here knows about storage or HTTP frameworks.

pub mod dto;
pub mod response;

pub use dto::{AuthorRequest, PostListResponse, PostRequest, PostResponse};
pub use response::ErrorResponse;
