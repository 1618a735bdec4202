use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::utils::error::{Error, Result};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Summary of a completed registration, forwarded to the automation
/// webhook. `birth_date` keeps the DD/MM/YYYY textual form.
#[derive(Debug, Clone)]
pub struct RegistrationSummary {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub zodiac_sign: String,
}

/// Best-effort delivery of a registration summary. Callers decide whether
/// a failure matters; the registration flow logs and moves on.
#[async_trait]
pub trait RegistrationNotifier: Send + Sync {
    async fn notify(&self, summary: &RegistrationSummary) -> Result<()>;
}

#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(webhook_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            url: webhook_url.to_string(),
        })
    }
}

#[async_trait]
impl RegistrationNotifier for WebhookClient {
    async fn notify(&self, summary: &RegistrationSummary) -> Result<()> {
        let body = WebhookPayload {
            nome: &summary.full_name,
            email: &summary.email,
            phone: &summary.phone,
            birth_date: &summary.birth_date,
            zodiac_sign: &summary.zodiac_sign,
        };

        let res = self.http.post(&self.url).json(&body).send().await?;

        if res.status().is_success() {
            tracing::info!("registration webhook delivered for {}", summary.email);
            Ok(())
        } else {
            let code = res.status().as_u16();
            let text = res.text().await.unwrap_or_default();
            Err(Error::Unexpected(format!(
                "webhook failed: status={code} body={text}"
            )))
        }
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    nome: &'a str,
    email: &'a str,
    phone: &'a str,
    birth_date: &'a str,
    zodiac_sign: &'a str,
}
