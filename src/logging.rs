use std::io::Write;
use std::sync::Once;

use chrono::Utc;

static INIT: Once = Once::new();

/// Installs the global `env_logger` once. `RUST_LOG` wins over `default_level` when set.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
        builder.format(|buf, record| {
            let ts = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
            writeln!(
                buf,
                "{} [{}] {}: {}",
                ts,
                record.level(),
                record.target(),
                record.args()
            )
        });
        // A logger installed by the host wins.
        let _ = builder.try_init();
    });
}
