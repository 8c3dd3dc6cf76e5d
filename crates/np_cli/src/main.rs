use clap::Parser;
use np_core::{AnalyzedArticle, Error, Report, Result};
use np_speech::{summary_sentence, AudioArtifact, TtsClient};
use std::path::Path;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Company news sentiment analysis client")]
struct Cli {
    /// Company name to analyze (e.g. "Tesla")
    company: String,

    /// Number of days of news to analyze
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=30))]
    days: u32,

    /// Base address of the analysis API
    #[arg(long, env = "NP_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Spoken language for the audio summary
    #[arg(long, default_value = "hi")]
    lang: String,

    /// Skip the audio summary
    #[arg(long)]
    mute: bool,
}

async fn fetch_analysis(api_url: &str, company: &str, days: u32) -> Result<Report> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/analyze", api_url))
        .json(&serde_json::json!({ "company_name": company, "days": days }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("API error: {}", response.status())));
    }

    Ok(response.json::<Report>().await?)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn render_summary(report: &Report) {
    println!();
    println!("Analysis Summary");
    println!("  Average polarity:     {:.2}", report.analysis.average_polarity);
    println!("  Average subjectivity: {:.2}", report.analysis.average_subjectivity);
    println!("  Article count:        {}", report.analysis.article_count);
}

fn render_table(articles: &[AnalyzedArticle]) {
    println!();
    println!("{:<58} {:<32} {:<20}", "Title", "Date", "Media");
    for row in articles {
        println!(
            "{:<58} {:<32} {:<20}",
            truncate(&row.article.title, 56),
            truncate(&row.article.date, 30),
            truncate(&row.article.media, 18)
        );
    }
}

fn play_audio(path: &Path) -> Result<()> {
    let (_stream, handle) = rodio::OutputStream::try_default()
        .map_err(|e| Error::Playback(format!("no audio output device: {}", e)))?;
    let sink = rodio::Sink::try_new(&handle)
        .map_err(|e| Error::Playback(format!("failed to open audio sink: {}", e)))?;

    let file = std::fs::File::open(path)?;
    let source = rodio::Decoder::new(std::io::BufReader::new(file))
        .map_err(|e| Error::Playback(format!("failed to decode audio: {}", e)))?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

async fn speak(sentence: &str, lang: &str) -> Result<()> {
    let bytes = TtsClient::new().synthesize(sentence, lang).await?;
    // The artifact removes its file when dropped, on every exit path
    let artifact = AudioArtifact::write(&bytes)?;
    play_audio(artifact.path())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if cli.company.trim().is_empty() {
        println!("Please enter a company name.");
        return Ok(());
    }

    println!("Analyzing news sentiment for '{}'...", cli.company);
    let report = match fetch_analysis(&cli.api_url, &cli.company, cli.days).await {
        Ok(report) => report,
        Err(e) => {
            debug!("Analysis request failed: {}", e);
            println!("Failed to get analysis results.");
            return Ok(());
        }
    };

    render_summary(&report);

    if report.articles.is_empty() {
        println!("No articles found for the given company.");
        return Ok(());
    }

    render_table(&report.articles);

    if cli.mute {
        return Ok(());
    }

    let sentence = summary_sentence(&cli.company, &report.analysis, &cli.lang);
    if let Err(e) = speak(&sentence, &cli.lang).await {
        println!("Audio summary failed: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_marks_long_text() {
        let truncated = truncate("a very long article title indeed", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_days_range_is_enforced() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        assert!(cmd
            .clone()
            .try_get_matches_from(["np_cli", "Tesla", "--days", "31"])
            .is_err());
        assert!(cmd
            .clone()
            .try_get_matches_from(["np_cli", "Tesla", "--days", "0"])
            .is_err());
        assert!(cmd
            .try_get_matches_from(["np_cli", "Tesla", "--days", "30"])
            .is_ok());
    }
}
