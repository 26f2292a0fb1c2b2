use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{current_timestamp, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    user_name: String,
    email: String,
    is_active: bool,
    created_on: i64,
    modified_on: i64,
}

impl User {
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            email: email.into(),
            is_active: true,
            created_on: now,
            modified_on: now,
        }
    }

    pub fn reconstitute(
        id: Uuid,
        user_name: String,
        email: String,
        is_active: bool,
        created_on: i64,
        modified_on: i64,
    ) -> Self {
        Self {
            id,
            user_name,
            email,
            is_active,
            created_on,
            modified_on,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_on(&self) -> i64 {
        self.created_on
    }

    pub fn modified_on(&self) -> i64 {
        self.modified_on
    }
}

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Uuid {
        self.id
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.user_name = other.user_name.clone();
        self.email = other.email.clone();
        self.is_active = other.is_active;
        self.created_on = other.created_on;
        self.modified_on = other.modified_on;
    }
}
