use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use remarque_client::{
    api::{Comment, Error},
    Persistence,
};

/// Browser `localStorage`, values stored as JSON
pub struct LocalSlot;

impl Persistence for LocalSlot {
    fn load(&self, key: &str) -> Result<Option<Vec<Comment>>, Error> {
        match LocalStorage::get(key) {
            Ok(comments) => Ok(Some(comments)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(Error::MalformedData(e.to_string())),
            Err(e) => Err(Error::StorageUnavailable(e.to_string())),
        }
    }

    fn save(&mut self, key: &str, comments: &[Comment]) -> Result<(), Error> {
        LocalStorage::set(key, comments).map_err(|e| Error::StorageUnavailable(e.to_string()))
    }
}
