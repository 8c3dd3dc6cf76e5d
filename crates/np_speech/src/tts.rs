use np_core::{Error, Result};
use std::time::Duration;
use tracing::info;

const TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Client for the Google Translate text-to-speech endpoint. Returns mp3
/// bytes; there is no text-only fallback on failure.
pub struct TtsClient {
    client: reqwest::Client,
}

impl TtsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent("Mozilla/5.0 (compatible; Newspulse/0.1)")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        info!("Synthesizing {} chars of '{}' speech", text.len(), lang);

        let response = self
            .client
            .get(TTS_URL)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Speech(format!(
                "speech backend returned status {}",
                response.status()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for TtsClient {
    fn default() -> Self {
        Self::new()
    }
}
