use std::collections::HashMap;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "kv-cli")]
#[command(about = "Command-line client for kv-server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store one or more key=value pairs
    Put {
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
    /// Print every stored key and value
    Get,
    /// Delete a single key
    Delete { key: String },
    /// Show request count and database size
    Stats,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Put { pairs } => {
            let body: HashMap<String, String> = pairs.into_iter().collect();
            let res = client
                .post(format!("{}/data", base))
                .json(&body)
                .send()
                .await?;
            print_status(res).await?;
        }
        Commands::Get => {
            let res = client.get(format!("{}/data", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Delete { key } => {
            let mut url = reqwest::Url::parse(base)?;
            url.path_segments_mut()
                .map_err(|_| "server URL cannot carry a path")?
                .pop_if_empty()
                .push("data")
                .push(&key);
            let res = client.delete(url).send().await?;
            print_status(res).await?;
        }
        Commands::Stats => {
            let res = client.get(format!("{}/stats", base)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_status(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        println!("{}", status);
    } else {
        report_failure(res).await;
    }
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    if !res.status().is_success() {
        report_failure(res).await;
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

async fn report_failure(res: reqwest::Response) {
    eprintln!("Error: server returned status {}", res.status());
    if let Ok(text) = res.text().await {
        eprintln!("Response: {}", text.trim_end());
    }
}
