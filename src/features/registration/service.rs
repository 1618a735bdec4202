use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};

use super::types::{RegisterUserReq, BIRTH_DATE_FORMAT};
use super::zodiac::{self, ZodiacSign};
use crate::features::clients::{RegistrationNotifier, RegistrationSummary};
use crate::features::users::{UserProfile, UserRepository};
use crate::utils::error::{Error, Result};

#[derive(Debug)]
pub struct RegisteredUser {
    pub id: String,
    pub zodiac_sign: ZodiacSign,
}

#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn RegistrationNotifier>,
}

impl RegistrationService {
    pub fn new(users: Arc<dyn UserRepository>, notifier: Arc<dyn RegistrationNotifier>) -> Self {
        Self { users, notifier }
    }

    /// Runs the registration flow in order: terms check, email uniqueness,
    /// zodiac computation, insert, best-effort webhook. The terms and
    /// uniqueness checks happen before any write; a webhook failure never
    /// affects the outcome of an already-persisted registration.
    pub async fn register(&self, req: RegisterUserReq) -> Result<RegisteredUser> {
        if !req.accept_terms {
            return Err(Error::TermsNotAccepted);
        }

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(Error::Conflict("Email já cadastrado.".into()));
        }

        let birth_date = NaiveDate::parse_from_str(&req.birth_date, BIRTH_DATE_FORMAT)
            .map_err(|_| Error::Validation("A data deve estar no formato DD/MM/YYYY".into()))?;
        let zodiac_sign = zodiac::sign_for(birth_date);

        let profile = UserProfile {
            id: None,
            full_name: req.full_name.clone(),
            birth_date: birth_date.and_time(NaiveTime::MIN).and_utc(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            accept_terms: req.accept_terms,
            zodiac_sign: zodiac_sign.as_str().to_string(),
            chat_id: None,
            created_at: Utc::now(),
        };
        let id = self.users.insert(&profile).await?;

        let summary = RegistrationSummary {
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            birth_date: req.birth_date,
            zodiac_sign: zodiac_sign.as_str().to_string(),
        };
        if let Err(e) = self.notifier.notify(&summary).await {
            tracing::warn!("registration webhook failed for {}: {e}", summary.email);
        }

        Ok(RegisteredUser {
            id: id.to_hex(),
            zodiac_sign,
        })
    }
}
