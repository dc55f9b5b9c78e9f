use std::env;

use chrono::Weekday;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub wav_path: Option<String>,
    pub state_path: Option<String>,
    pub reflection: Option<String>,
    pub today: Option<Weekday>,
    pub log_level: String,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wav_path: None,
            state_path: None,
            reflection: None,
            today: None,
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

fn parse_env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| parse_bool(&v))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn from_env_or_args() -> Config {
    let mut cfg = Config::default();
    apply_env(&mut cfg);
    apply_args(&mut cfg, env::args().skip(1));
    cfg
}

pub fn apply_env(cfg: &mut Config) {
    if let Some(path) = env::var("WELLNESS_WAV").ok().and_then(non_empty) {
        cfg.wav_path = Some(path);
    }

    if let Some(path) = env::var("WELLNESS_STATE").ok().and_then(non_empty) {
        cfg.state_path = Some(path);
    }

    if let Some(day) = env::var("WELLNESS_TODAY").ok().and_then(|v| parse_weekday(&v)) {
        cfg.today = Some(day);
    }

    if let Some(level) = env::var("WELLNESS_LOG_LEVEL").ok().and_then(non_empty) {
        cfg.log_level = level.to_ascii_lowercase();
    }

    if let Some(pretty) = parse_env_bool("WELLNESS_PRETTY") {
        cfg.pretty = pretty;
    }
}

/// Applies `--flag value` arguments on top of `cfg`. Unknown flags and bad values are ignored.
pub fn apply_args<I>(cfg: &mut Config, args: I)
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--wav" => {
                if let Some(val) = args.next().and_then(non_empty) {
                    cfg.wav_path = Some(val);
                }
            }
            "--state" => {
                if let Some(val) = args.next().and_then(non_empty) {
                    cfg.state_path = Some(val);
                }
            }
            "--reflect" => {
                if let Some(val) = args.next() {
                    cfg.reflection = Some(val);
                }
            }
            "--today" => {
                if let Some(day) = args.next().as_deref().and_then(parse_weekday) {
                    cfg.today = Some(day);
                }
            }
            "--log-level" => {
                if let Some(val) = args.next().and_then(non_empty) {
                    cfg.log_level = val.to_ascii_lowercase();
                }
            }
            "--pretty" => {
                cfg.pretty = true;
            }
            "--compact" => {
                cfg.pretty = false;
            }
            _ => {}
        }
    }
}
