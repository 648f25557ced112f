use crate::{CommentId, ReplyId};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Text is empty")]
    EmptyText,

    #[error("Unknown comment {0:?}")]
    UnknownComment(CommentId),

    #[error("Unknown reply {1:?} on comment {0:?}")]
    UnknownReply(CommentId, ReplyId),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("No identifier left after the largest stored one")]
    IdsExhausted,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Malformed stored data: {0}")]
    MalformedData(String),
}

impl Error {
    /// Whether this error is an action the store refused, as opposed to a
    /// storage failure
    pub fn is_rejection(&self) -> bool {
        match self {
            Error::EmptyText
            | Error::UnknownComment(_)
            | Error::UnknownReply(_, _)
            | Error::PermissionDenied
            | Error::IdsExhausted => true,
            Error::StorageUnavailable(_) | Error::MalformedData(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections() {
        assert!(Error::EmptyText.is_rejection());
        assert!(Error::PermissionDenied.is_rejection());
        assert!(Error::IdsExhausted.is_rejection());
        assert!(Error::UnknownReply(CommentId(1), ReplyId(2)).is_rejection());
        assert!(!Error::StorageUnavailable(String::from("quota")).is_rejection());
        assert!(!Error::MalformedData(String::from("eof")).is_rejection());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnknownComment(CommentId(7)).to_string(),
            "Unknown comment CommentId(7)",
        );
    }
}
