pub mod collection;
pub mod comment;

pub use collection::RecordCollection;
pub use comment::CommentRecord;
