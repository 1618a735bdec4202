use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use super::UserProfile;
use crate::utils::error::{Error, Result};

pub const USERS_COLLECTION: &str = "users";

/// Storage seam for user profiles. Uniqueness of `email` is enforced by the
/// services through `find_by_email` before `insert`; the collection carries
/// no unique index, so two concurrent registrations with the same email can
/// still race past the check (known weakness, kept as observed behavior).
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>>;

    async fn insert(&self, profile: &UserProfile) -> Result<ObjectId>;

    /// Returns true iff exactly one document was modified.
    async fn update_chat_id(&self, email: &str, chat_id: i64) -> Result<bool>;
}

#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserProfile>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection::<UserProfile>(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let user = self.users.find_one(doc! { "email": email }).await?;

        Ok(user)
    }

    async fn insert(&self, profile: &UserProfile) -> Result<ObjectId> {
        let result = self.users.insert_one(profile).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| Error::Unexpected("insert did not return an object id".into()))
    }

    async fn update_chat_id(&self, email: &str, chat_id: i64) -> Result<bool> {
        let result = self
            .users
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "chat_id": chat_id } },
            )
            .await?;

        Ok(result.modified_count == 1)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Vec-backed repository with the same check-then-insert semantics as
    /// the Mongo implementation.
    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<UserProfile>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.users.lock().unwrap().len()
        }

        pub fn stored(&self, email: &str) -> Option<UserProfile> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
            Ok(self.stored(email))
        }

        async fn insert(&self, profile: &UserProfile) -> Result<ObjectId> {
            let id = ObjectId::new();
            let mut stored = profile.clone();
            stored.id = Some(id);
            self.users.lock().unwrap().push(stored);

            Ok(id)
        }

        async fn update_chat_id(&self, email: &str, chat_id: i64) -> Result<bool> {
            let mut users = self.users.lock().unwrap();
            let mut modified = 0;
            for user in users.iter_mut().filter(|u| u.email == email) {
                user.chat_id = Some(chat_id);
                modified += 1;
            }

            Ok(modified == 1)
        }
    }
}
