use std::sync::Arc;

use crate::features::users::{UserProfileDto, UserRepository};
use crate::utils::error::{Error, Result};

#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Sets `chat_id` on the profile with this email. The modified-count
    /// check is defensive; it cannot be anything but 1 once the email was
    /// found.
    pub async fn update_chat_id(&self, email: &str, chat_id: i64) -> Result<()> {
        if self.users.find_by_email(email).await?.is_none() {
            return Err(Error::NotFound);
        }

        if !self.users.update_chat_id(email, chat_id).await? {
            return Err(Error::UpdateFailed(
                "Não foi possível atualizar o chat ID.".into(),
            ));
        }

        Ok(())
    }

    pub async fn lookup(&self, email: &str) -> Result<UserProfileDto> {
        match self.users.find_by_email(email).await? {
            Some(profile) => Ok(profile.into()),
            None => Err(Error::NotFound),
        }
    }
}
