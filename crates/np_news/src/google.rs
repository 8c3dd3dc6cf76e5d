use async_trait::async_trait;
use np_core::{Article, Error, Result};
use rss::Channel;
use std::time::Duration;
use tracing::info;

use crate::NewsSource;

const FEED_URL: &str = "https://news.google.com/rss/search";

/// One feed item exactly as the backend reported it, before any shape
/// guarantees apply.
#[derive(Debug, Default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub date: Option<String>,
}

impl From<&rss::Item> for RawRecord {
    fn from(item: &rss::Item) -> Self {
        Self {
            title: item.title().map(str::to_string),
            description: item.description().map(str::to_string),
            media: item.source().and_then(|s| s.title()).map(str::to_string),
            date: item.pub_date().map(str::to_string),
        }
    }
}

impl RawRecord {
    /// Coerces into the fixed Article shape; absent fields become empty text.
    pub fn into_article(self) -> Article {
        Article {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            media: self.media.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        }
    }
}

/// Client for the Google News RSS search feed.
pub struct GoogleNewsClient {
    client: reqwest::Client,
}

impl GoogleNewsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent("Mozilla/5.0 (compatible; Newspulse/0.1)")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn search_url(keyword: &str, days: u32) -> String {
        // "when:<d>d" scopes the search to a trailing day window
        let query = format!("{} when:{}d", keyword, days);
        format!(
            "{}?q={}&hl=en&gl=US&ceid=US:en",
            FEED_URL,
            urlencoding::encode(&query)
        )
    }
}

impl Default for GoogleNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for GoogleNewsClient {
    fn name(&self) -> &str {
        "Google News"
    }

    async fn search(&self, keyword: &str, days: u32) -> Result<Vec<Article>> {
        let url = Self::search_url(keyword, days);
        info!("Fetching news feed: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "news feed returned status {}",
                response.status()
            )));
        }

        let content = response.bytes().await?;
        let channel = Channel::read_from(&content[..])
            .map_err(|e| Error::Fetch(format!("failed to parse news feed: {}", e)))?;

        let articles: Vec<Article> = channel
            .items()
            .iter()
            .map(|item| RawRecord::from(item).into_article())
            .collect();

        info!("Feed returned {} articles for '{}'", articles.len(), keyword);
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_keyword_and_window() {
        let url = GoogleNewsClient::search_url("Acme Corp", 7);
        assert!(url.starts_with(FEED_URL));
        assert!(url.contains("q=Acme%20Corp%20when%3A7d"));
        assert!(url.contains("hl=en&gl=US&ceid=US:en"));
    }

    #[test]
    fn test_empty_record_coerces_to_empty_article() {
        let article = RawRecord::default().into_article();
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert_eq!(article.media, "");
        assert_eq!(article.date, "");
    }

    #[test]
    fn test_item_fields_carry_over() {
        let item = rss::ItemBuilder::default()
            .title(Some("Quarterly results".to_string()))
            .description(Some("Profits rose sharply".to_string()))
            .pub_date(Some("Mon, 12 Aug 2024 10:00:00 GMT".to_string()))
            .build();

        let article = RawRecord::from(&item).into_article();
        assert_eq!(article.title, "Quarterly results");
        assert_eq!(article.description, "Profits rose sharply");
        assert_eq!(article.date, "Mon, 12 Aug 2024 10:00:00 GMT");
        // No <source> element on the item
        assert_eq!(article.media, "");
    }
}
