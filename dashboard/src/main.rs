use api::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use tracing::{error, info, warn};
use validators::{validate_empty_and_email, validate_empty_or_length3, Validation};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "A CLI for the feedbacker dashboard API client and form validators")]
struct Cli {
    /// Environment whose endpoint the client is bound to
    #[arg(long, global = true, default_value = "local")]
    env: Environment,
    /// Override the local endpoint
    #[arg(long, global = true)]
    local_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the selected environment and its base URL
    Config,
    /// Validate a form field value
    Validate {
        #[command(subcommand)]
        field: Field,
    },
    /// Issue a request through the configured client
    Request {
        /// HTTP method
        #[arg(value_enum)]
        method: HttpMethod,
        /// Path relative to the base URL
        path: String,
        /// JSON request body
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[derive(Subcommand)]
enum Field {
    /// Required, at least 3 characters
    Name { value: Option<String> },
    /// Required, must be an email address
    Email { value: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command {
        Commands::Config => {
            config
                .validate()
                .map_err(|message| ApiError::InvalidConfig { message })?;
            println!("environment: {}", config.environment);
            println!("base_url: {}", config.base_url());
        }
        Commands::Validate { field } => {
            let result = validate_field(&field);
            println!("{}", serde_json::to_string(&result)?);
            let code = exit_code(result);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Request { method, path, body } => {
            let client = ApiClient::new(config)?;
            match run_request(&client, method, &path, body.as_deref()).await {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    error!("Request failed: {}", e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> ApiConfig {
    let mut config = ApiConfig::new()
        .with_environment(cli.env)
        .with_timeout(Duration::from_secs(cli.timeout));

    if let Some(url) = &cli.local_url {
        config = config.with_local_url(url.clone());
    }

    config
}

fn validate_field(field: &Field) -> Validation {
    match field {
        Field::Name { value } => validate_empty_or_length3(value.as_deref()),
        Field::Email { value } => validate_empty_and_email(value.as_deref()),
    }
}

/// Non-zero when the field was rejected, so scripts can branch on the outcome.
fn exit_code(result: Validation) -> i32 {
    match result.into_result() {
        Ok(()) => 0,
        Err(message) => {
            warn!("Field rejected: {}", message);
            1
        }
    }
}

async fn run_request(
    client: &ApiClient,
    method: HttpMethod,
    path: &str,
    body: Option<&str>,
) -> ApiResult<String> {
    let body: serde_json::Value = match body {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::json!({}),
    };

    let response = match method {
        HttpMethod::Get => client.get(path).await?,
        HttpMethod::Delete => client.delete(path).await?,
        HttpMethod::Post => client.post(path, &body).await?,
        HttpMethod::Put => client.put(path, &body).await?,
        HttpMethod::Patch => client.patch(path, &body).await?,
    };

    let status = response.status();
    info!("{:?} {} -> {}", method, path, status);

    let text = client.text(response).await?;
    Ok(format!("{}\n{}", status, text))
}
