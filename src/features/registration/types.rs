use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";
pub const MIN_REGISTRATION_AGE: i32 = 16;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterUserReq {
    #[validate(length(min = 3))]
    pub full_name: String,
    /// Data de nascimento no formato DD/MM/YYYY
    #[validate(custom(function = validate_birth_date))]
    pub birth_date: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub phone: String,
    /// Deve ser true para aceitar os termos de uso
    pub accept_terms: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserResp {
    pub id: String,
    pub message: String,
    pub zodiac_sign: String,
}

/// Completed years at `today`, counting the birthday itself as completed.
pub(crate) fn age_on(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    age
}

fn validate_birth_date(value: &str) -> Result<(), ValidationError> {
    let birth = match NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            let mut err = ValidationError::new("invalid_date_format");
            err.message = Some("A data deve estar no formato DD/MM/YYYY".into());
            return Err(err);
        }
    };

    if age_on(Utc::now().date_naive(), birth) < MIN_REGISTRATION_AGE {
        let mut err = ValidationError::new("underage");
        err.message = Some("É necessário ter no mínimo 16 anos para se cadastrar.".into());
        return Err(err);
    }

    Ok(())
}
