//! Request extractors that report rejections as JSON [`AppError`](crate::errors::AppError)s.

mod json_body;
mod record_id;

pub use json_body::JsonBody;
pub use record_id::RecordId;
