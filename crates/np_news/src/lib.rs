use async_trait::async_trait;
use np_core::{Article, Result};

pub mod google;

pub use google::GoogleNewsClient;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news backend
    fn name(&self) -> &str;

    /// Searches for articles about `keyword` within the trailing `days` window
    async fn search(&self, keyword: &str, days: u32) -> Result<Vec<Article>>;
}

pub mod prelude {
    pub use super::{GoogleNewsClient, NewsSource};
    pub use np_core::{Article, Error, Result};
}
