use crate::model::LogLevelConfig;
use crate::utils::read_config_as;
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

pub const ENV_LOG: &str = "NOVAPORTAL_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::connect",
    "hyper_util::client",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

/// Level directives from a string like `info` or `info,novaportal::auth=debug`.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut modules = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                modules.push((module.to_string(), get_log_level(level)));
            }
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, modules)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(ENV_LOG).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| {               // config
            read_config_as::<LogLevelConfig>(config_file)
                .map_err(|e| error!("Failed to parse log config file: {e}"))
                .ok()
                .flatten()
                .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
        })
        .unwrap_or_else(|| "info".to_string()); // Default

    let (default_level, modules) = parse_log_levels(&log_level);
    let mut log_levels = vec![];
    if let Some(level) = default_level {
        log_builder.filter_level(level);
        log_levels.push(level.to_string());
    } else if modules.is_empty() {
        log_builder.filter_level(LevelFilter::Info);
        log_levels.push(LevelFilter::Info.to_string());
    }
    for (module, level) in modules {
        log_levels.push(format!("{module}={level}"));
        log_builder.filter_module(&module, level);
    }
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    log_builder.init();
    info!("Log Level {}", &log_levels.join(", "));
}
