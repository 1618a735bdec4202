use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::{
    error::Error as StdError,
    fmt::{self},
};

#[derive(Debug)]
pub enum Error {
    NotFound,
    Validation(String),
    TermsNotAccepted,
    Conflict(String),
    UpdateFailed(String),
    Db(mongodb::error::Error),
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Usuário não encontrado."),
            Error::Validation(msg) => write!(f, "{msg}"),
            Error::TermsNotAccepted => {
                write!(f, "É necessário aceitar os termos de uso para se cadastrar.")
            }
            Error::Conflict(msg) => write!(f, "{msg}"),
            Error::UpdateFailed(msg) => write!(f, "{msg}"),
            Error::Db(e) => write!(f, "database error: {e}"),
            Error::Unexpected(msg) => write!(f, "unexpected error: {msg}"),
        }
    }
}

impl StdError for Error {}

impl From<mongodb::error::Error> for Error {
    fn from(value: mongodb::error::Error) -> Self {
        Error::Db(value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Unexpected(format!("http error: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::TermsNotAccepted => StatusCode::BAD_REQUEST,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::UpdateFailed(_) => StatusCode::BAD_REQUEST,
            Error::Db(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message) = match self {
            Error::NotFound => ("NOT_FOUND", self.to_string()),
            Error::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            Error::TermsNotAccepted => ("TERMS_NOT_ACCEPTED", self.to_string()),
            Error::Conflict(_) => ("CONFLICT", self.to_string()),
            Error::UpdateFailed(_) => ("UPDATE_FAILED", self.to_string()),
            Error::Db(_) => ("DB_ERROR", self.to_string()),
            Error::Unexpected(_) => ("UNEXPECTED", self.to_string()),
        };

        let body = ErrorBody { code, message };
        HttpResponse::build(self.status_code()).json(body)
    }
}
