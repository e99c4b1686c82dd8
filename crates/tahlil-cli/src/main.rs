//! Command-line interface for the tahlil analysis engine

use clap::Parser;
use std::sync::Arc;
use tahlil_engine::{
    AnalysisEngine, AnalysisResult, EngineConfig, ReportLanguage, SecurityCatalog, Timeframe,
    YahooMarketData,
};
use tahlil_llm::{GeminiModel, LanguageModel};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tahlil")]
#[command(about = "Technical analysis for Egyptian stocks", long_about = None)]
struct Args {
    /// Stock name, symbol, or Arabic name (e.g. "Fawry", "COMI.CA", "فوري")
    query: String,

    /// Analysis timeframe: "intraday" (15m), "short_term" (1h), or "daily" (1d)
    #[arg(short, long, default_value = "daily")]
    timeframe: String,

    /// Generate the report in English instead of Arabic
    #[arg(long)]
    english: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

/// Initialize tracing subscriber with default configuration
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let timeframe = Timeframe::from_query(Some(&args.timeframe));

    let language = if args.english {
        ReportLanguage::English
    } else {
        ReportLanguage::Arabic
    };
    let config = EngineConfig::builder().language(language).build()?;

    let narrative: Option<Arc<dyn LanguageModel>> = match GeminiModel::from_env() {
        Ok(model) => Some(Arc::new(model)),
        Err(e) => {
            warn!(error = %e, "narrative model unavailable, reports will use the deterministic fallback");
            None
        }
    };

    let yahoo = Arc::new(YahooMarketData::new());
    let engine = AnalysisEngine::new(
        SecurityCatalog::egx(),
        Arc::clone(&yahoo) as _,
        yahoo as _,
        narrative,
        config,
    );

    info!(query = %args.query, ?timeframe, "running analysis");

    match engine.analyze_safe(&args.query, timeframe).await {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
            Ok(())
        }
        Err(failure) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&failure)?);
            } else {
                eprintln!("Analysis failed ({:?}): {}", failure.code, failure.message);
            }
            std::process::exit(1);
        }
    }
}

fn print_result(result: &AnalysisResult) {
    let ind = &result.indicators;
    let report = &result.report;

    println!("\n{}", result.summary());
    println!("{}", "=".repeat(60));

    println!(
        "Price: {} (prev {}, change {} / {}%)",
        ind.current_price,
        ind.previous_close,
        ind.price_change,
        fmt(ind.price_change_percent),
    );
    println!(
        "RSI: {}  MFI: {}  CCI: {}  Stoch K/D: {}/{}",
        fmt(ind.rsi),
        fmt(ind.mfi),
        fmt(ind.cci),
        fmt(ind.stochastic.k),
        fmt(ind.stochastic.d),
    );
    println!(
        "MACD: {} signal {} histogram {}  ATR: {}",
        fmt(ind.macd.macd),
        fmt(ind.macd.signal),
        fmt(ind.macd.histogram),
        fmt(ind.atr),
    );
    println!(
        "SMA 10/50/200: {} / {} / {}",
        fmt(ind.moving_averages.sma10),
        fmt(ind.moving_averages.sma50),
        fmt(ind.moving_averages.sma200),
    );
    println!(
        "Pivot: {}  R1: {}  R2: {}  S1: {}  S2: {}",
        ind.pivot_points.pp,
        ind.pivot_points.r1,
        ind.pivot_points.r2,
        ind.pivot_points.s1,
        ind.pivot_points.s2,
    );

    println!("{}", "-".repeat(60));
    println!(
        "Recommendation: {} (confidence: {})",
        report.recommendation.as_str(),
        report.confidence.as_str(),
    );
    println!("\n{}\n", report.analysis);
}

fn fmt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}
