#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::model::{Config, HealthcheckConfig};
use crate::repository::{seed, Database};
use crate::utils::{init_logger, read_config, read_config_as, resolve_env_var};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "novaportal")]
#[command(version)]
#[command(about = "Nova portal server with role scoped back-office", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,

    /// Seed demo users, settings and projects, then exit
    #[arg(short = None, long = "seed", default_value_t = false, default_missing_value = "true")]
    seed: bool,

    #[arg(short = None, long = "healthcheck", default_value_t = false, default_missing_value = "true")]
    healthcheck: bool,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_file = get_config_file_path(&args);

    init_logger(args.log_level.as_ref(), config_file.as_str());

    if args.healthcheck {
        let healthy = healthcheck(config_file.as_str()).await;
        std::process::exit(i32::from(!healthy));
    }

    info!("Version: {VERSION}");
    let config = read_config(config_file.as_str()).unwrap_or_else(|err| exit!("{}", err));
    print_info(&config, config_file.as_str());

    if args.seed {
        let db = Database::open(&PathBuf::from(&config.storage.data_dir)).await.unwrap_or_else(|err| exit!("{}", err));
        if let Err(err) = seed::seed_demo_data(&db, config.auth.hash_cost()).await {
            exit!("Seeding failed: {err}");
        }
        info!("Seed completed");
        return;
    }

    if let Err(err) = api::main_api::start_server(Arc::new(config)).await {
        exit!("Can't start server: {err}");
    }
}

fn print_info(config: &Config, config_file: &str) {
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Config file: {config_file}");
    info!("Data dir: {}", config.storage.data_dir);
    info!("Web root: {}", config.api.web_root);
    info!("Token lifetime: {}s", config.auth.t_token_ttl_secs);
}

fn get_config_file_path(args: &Args) -> String {
    resolve_env_var(&args.config_file.as_ref().map_or_else(utils::get_default_config_file_path, ToString::to_string))
}

#[derive(Deserialize)]
struct HealthResponse {
    ok: bool,
}

async fn healthcheck(config_file: &str) -> bool {
    let port = match read_config_as::<HealthcheckConfig>(config_file) {
        Ok(Some(config)) => config.api.port,
        Ok(None) => model::default_api_port(),
        Err(err) => {
            error!("Failed to parse config file for healthcheck {err}");
            return false;
        }
    };
    let port = model::port_override().unwrap_or(port);
    match reqwest::Client::new()
        .get(format!("http://localhost:{port}{}", shared::utils::HEALTH_PATH))
        .send()
        .await
    {
        Ok(response) => matches!(response.json::<HealthResponse>().await, Ok(check) if check.ok),
        Err(err) => {
            error!("Healthcheck request failed {err}");
            false
        }
    }
}
