use std::collections::HashMap;

use crate::{
    api::{Action, Comment, CommentId, Error, Reply, ReplyId, UserId},
    Clock, Config, IdGenerator, Persistence, SystemClock,
};

pub struct CommentStore {
    config: Config,
    comments: Vec<Comment>,
    pending_comment: String,
    pending_replies: HashMap<CommentId, String>,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    backend: Box<dyn Persistence>,
    save_error: Option<Error>,
}

impl CommentStore {
    pub fn open(config: Config, backend: Box<dyn Persistence>) -> CommentStore {
        CommentStore::with_clock(config, backend, Box::new(SystemClock))
    }

    /// Build the store and load the saved comment list, if any
    ///
    /// Storage that cannot be read, or that holds something other than a
    /// comment list, is treated as empty.
    pub fn with_clock(
        config: Config,
        backend: Box<dyn Persistence>,
        clock: Box<dyn Clock>,
    ) -> CommentStore {
        let comments = match backend.load(&config.storage_key) {
            Ok(Some(comments)) => comments,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %config.storage_key, "discarding saved comments: {e}");
                Vec::new()
            }
        };
        tracing::debug!(num_comments = comments.len(), "loaded comments");
        CommentStore {
            ids: IdGenerator::starting_after(Comment::max_id(&comments)),
            config,
            comments,
            pending_comment: String::new(),
            pending_replies: HashMap::new(),
            clock,
            backend,
            save_error: None,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn current_user(&self) -> &UserId {
        &self.config.current_user
    }

    pub fn is_owned(&self, author: &UserId) -> bool {
        *author == self.config.current_user
    }

    /// Last failed write, cleared by the next successful one
    pub fn save_error(&self) -> Option<&Error> {
        self.save_error.as_ref()
    }

    pub fn pending_comment(&self) -> &str {
        &self.pending_comment
    }

    pub fn set_pending_comment(&mut self, value: String) {
        self.pending_comment = value;
    }

    pub fn pending_reply(&self, comment_id: CommentId) -> &str {
        self.pending_replies
            .get(&comment_id)
            .map(|t| t.as_str())
            .unwrap_or("")
    }

    pub fn set_pending_reply(&mut self, comment_id: CommentId, value: String) {
        self.pending_replies.insert(comment_id, value);
    }

    pub fn apply(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::AddComment(text) => self.add_comment(text).map(|_| ()),
            Action::DeleteComment(id) => self.delete_comment(id),
            Action::AddReply { comment_id, text } => self.add_reply(comment_id, text).map(|_| ()),
            Action::DeleteReply {
                comment_id,
                reply_id,
            } => self.delete_reply(comment_id, reply_id),
        }
    }

    pub fn add_comment(&mut self, text: String) -> Result<CommentId, Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        let id = CommentId(self.next_id()?);
        self.comments
            .push(Comment::new(id, text, self.config.current_user.clone()));
        self.pending_comment.clear();
        self.persist();
        Ok(id)
    }

    pub fn submit_comment(&mut self) -> Result<CommentId, Error> {
        self.add_comment(self.pending_comment.clone())
    }

    /// Remove the comment and all its replies, if it belongs to the current user
    pub fn delete_comment(&mut self, id: CommentId) -> Result<(), Error> {
        let user = &self.config.current_user;
        let mut found = false;
        let before = self.comments.len();
        self.comments.retain(|c| {
            found |= c.id == id;
            c.id != id || c.user_id != *user
        });
        if !found {
            return Err(Error::UnknownComment(id));
        }
        if self.comments.len() == before {
            return Err(Error::PermissionDenied);
        }
        self.pending_replies.remove(&id);
        self.persist();
        Ok(())
    }

    pub fn add_reply(&mut self, comment_id: CommentId, text: String) -> Result<ReplyId, Error> {
        if !self.comments.iter().any(|c| c.id == comment_id) {
            return Err(Error::UnknownComment(comment_id));
        }
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        let id = ReplyId(self.next_id()?);
        // a hand-edited snapshot may repeat a comment id, only the first one
        // gets the reply so that reply ids stay unique
        if let Some(c) = self.comments.iter_mut().find(|c| c.id == comment_id) {
            c.replies.push(Reply {
                id,
                text,
                user_id: self.config.current_user.clone(),
            });
        }
        self.pending_replies.insert(comment_id, String::new());
        self.persist();
        Ok(id)
    }

    pub fn submit_reply(&mut self, comment_id: CommentId) -> Result<ReplyId, Error> {
        let text = String::from(self.pending_reply(comment_id));
        self.add_reply(comment_id, text)
    }

    /// Remove the reply, if it belongs to the current user
    pub fn delete_reply(&mut self, comment_id: CommentId, reply_id: ReplyId) -> Result<(), Error> {
        let user = &self.config.current_user;
        let mut comment_found = false;
        let mut reply_found = false;
        let mut removed = false;
        for c in self.comments.iter_mut().filter(|c| c.id == comment_id) {
            comment_found = true;
            let before = c.replies.len();
            c.replies.retain(|r| {
                reply_found |= r.id == reply_id;
                r.id != reply_id || r.user_id != *user
            });
            removed |= c.replies.len() != before;
        }
        if !comment_found {
            return Err(Error::UnknownComment(comment_id));
        }
        if !reply_found {
            return Err(Error::UnknownReply(comment_id, reply_id));
        }
        if !removed {
            return Err(Error::PermissionDenied);
        }
        self.persist();
        Ok(())
    }

    fn next_id(&mut self) -> Result<i64, Error> {
        self.ids.next(self.clock.now()).ok_or(Error::IdsExhausted)
    }

    fn persist(&mut self) {
        match self.backend.save(&self.config.storage_key, &self.comments) {
            Ok(()) => {
                tracing::trace!(num_comments = self.comments.len(), "comments saved");
                self.save_error = None;
            }
            Err(e) => {
                tracing::error!(key = %self.config.storage_key, "failed saving comments: {e}");
                self.save_error = Some(e);
            }
        }
    }
}
