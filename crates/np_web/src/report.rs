use chrono::Local;
use np_analysis::Analyzer;
use np_core::{Report, Result};
use np_news::NewsSource;
use tracing::info;

/// Fetches, analyzes and assembles one report. Fetch errors propagate
/// untouched; the service boundary decides how to present them.
pub async fn generate_report(
    source: &dyn NewsSource,
    analyzer: &Analyzer,
    keyword: &str,
    days: u32,
) -> Result<Report> {
    let articles = source.search(keyword, days).await?;
    info!("Building report for '{}' from {} articles", keyword, articles.len());

    let batch = analyzer.analyze(articles);

    Ok(Report {
        keyword: keyword.to_string(),
        time_period: format!("{} days", days),
        analysis: batch.analysis,
        articles: batch.articles,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
