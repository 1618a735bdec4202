use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored user document. `birth_date` carries midnight UTC of the calendar
/// date so the store keeps a real datetime; `chat_id` is absent until set
/// through the dedicated update call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub full_name: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub birth_date: DateTime<Utc>,
    pub email: String,
    pub phone: String,
    pub accept_terms: bool,
    pub zodiac_sign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Outbound view of a profile: the store id rendered as a hex string, the
/// birth date rendered back to DD/MM/YYYY, no `_id` field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub id: String,
    pub full_name: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
    pub accept_terms: bool,
    pub zodiac_sign: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(user: UserProfile) -> Self {
        UserProfileDto {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            full_name: user.full_name,
            birth_date: user.birth_date.format("%d/%m/%Y").to_string(),
            email: user.email,
            phone: user.phone,
            accept_terms: user.accept_terms,
            zodiac_sign: user.zodiac_sign,
            chat_id: user.chat_id,
        }
    }
}
