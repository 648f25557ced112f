use crate::UserId;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub i64);

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ReplyId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,

    /// Text as typed, not trimmed
    pub text: String,

    pub user_id: UserId,

    /// Replies in display order
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: ReplyId,
    pub text: String,
    pub user_id: UserId,
}

impl Comment {
    pub fn new(id: CommentId, text: String, user_id: UserId) -> Comment {
        Comment {
            id,
            text,
            user_id,
            replies: Vec::new(),
        }
    }

    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    /// Largest comment or reply id found in `comments`
    pub fn max_id(comments: &[Comment]) -> Option<i64> {
        comments
            .iter()
            .flat_map(|c| std::iter::once(c.id.0).chain(c.replies.iter().map(|r| r.id.0)))
            .max()
    }
}
