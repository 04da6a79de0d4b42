use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,  // Stored as entered, no hashing
    pub email: String,
}

impl User {
    pub fn new(username: String, password: String, email: String) -> Self {
        Self { username, password, email }
    }

    /// Exact, case-sensitive match on both credentials.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn owns_email(&self, username: &str, email: &str) -> bool {
        self.username == username && self.email == email
    }
}
