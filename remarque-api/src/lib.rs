mod action;
pub use action::Action;

mod comment;
pub use comment::{Comment, CommentId, Reply, ReplyId};

mod error;
pub use error::Error;

mod user;
pub use user::UserId;
