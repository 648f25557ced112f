use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::api::{Comment, Error};

/// A key-value slot holding the whole comment list
pub trait Persistence {
    /// Returns `Ok(None)` if nothing was ever saved under `key`
    fn load(&self, key: &str) -> Result<Option<Vec<Comment>>, Error>;

    fn save(&mut self, key: &str, comments: &[Comment]) -> Result<(), Error>;
}

/// In-memory storage, keeping values serialized the same way a browser would
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    values: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemorySlot {
    pub fn new() -> MemorySlot {
        MemorySlot::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn set_raw(&self, key: &str, value: String) {
        self.values.borrow_mut().insert(String::from(key), value);
    }

    /// Make every following `save` fail, as a full or disabled storage would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl Persistence for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<Vec<Comment>>, Error> {
        match self.values.borrow().get(key) {
            None => Ok(None),
            Some(v) => serde_json::from_str(v)
                .map(Some)
                .map_err(|e| Error::MalformedData(e.to_string())),
        }
    }

    fn save(&mut self, key: &str, comments: &[Comment]) -> Result<(), Error> {
        if self.fail_writes.get() {
            return Err(Error::StorageUnavailable(String::from("quota exceeded")));
        }
        let v = serde_json::to_string(comments)
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
        self.values.borrow_mut().insert(String::from(key), v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentId, UserId};

    #[test]
    fn absent_key() {
        assert_eq!(MemorySlot::new().load("comments"), Ok(None));
    }

    #[test]
    fn save_then_load() {
        let mut slot = MemorySlot::new();
        let comments = vec![Comment::new(
            CommentId(42),
            String::from("hi"),
            UserId::stub(),
        )];
        slot.save("comments", &comments).unwrap();
        assert_eq!(
            slot.raw("comments").as_deref(),
            Some(r#"[{"id":42,"text":"hi","userId":"random-id","replies":[]}]"#),
        );
        assert_eq!(slot.clone().load("comments"), Ok(Some(comments)));
        assert_eq!(slot.load("other"), Ok(None));
    }

    #[test]
    fn malformed_value() {
        let slot = MemorySlot::new();
        slot.set_raw("comments", String::from("{not json"));
        assert!(matches!(
            slot.load("comments"),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn failing_writes() {
        let mut slot = MemorySlot::new();
        slot.set_fail_writes(true);
        assert!(matches!(
            slot.save("comments", &[]),
            Err(Error::StorageUnavailable(_))
        ));
        assert_eq!(slot.raw("comments"), None);
    }
}
