use crate::{CommentId, ReplyId};

/// A single mutation of the comment list, as triggered by the UI
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    AddComment(String),
    DeleteComment(CommentId),
    AddReply {
        comment_id: CommentId,
        text: String,
    },
    DeleteReply {
        comment_id: CommentId,
        reply_id: ReplyId,
    },
}
