use crate::api::UserId;

pub const DEFAULT_STORAGE_KEY: &str = "comments";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Name of the slot the whole comment list is saved under
    pub storage_key: String,

    /// Author of everything created through the store, and the only user
    /// allowed to delete
    pub current_user: UserId,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            current_user: UserId::stub(),
        }
    }
}
