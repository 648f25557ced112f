#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub String);

impl UserId {
    /// The fixed identity standing in for the logged-in user
    pub fn stub() -> UserId {
        UserId(String::from("random-id"))
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> UserId {
        UserId(String::from(s))
    }
}
