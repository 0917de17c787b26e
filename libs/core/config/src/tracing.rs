use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre for startup error reports. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter used when `RUST_LOG` is unset or unparsable.
///
/// The service crates log at `debug` in development so every repository
/// write and instrumented service span is visible; SQL statement logging
/// stays at `info` unless `DB_SQLX_LOGGING` turns it up.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "warn,todo_api=info,domain_todos=info,axum_helpers=info,database=info,tower_http=info"
    } else {
        "info,todo_api=debug,domain_todos=debug,axum_helpers=debug,database=debug,\
         migration=debug,tower_http=debug,sea_orm=info,sqlx=info"
    }
}

fn build_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(environment)))
}

/// Initialize the global subscriber.
///
/// Production writes flattened JSON lines; development writes the pretty
/// format with module targets. Both carry `tracing_error::ErrorLayer` so
/// eyre reports include the active span trace. A second call is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = build_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_per_environment() {
        let dev = default_filter(&Environment::Development);
        assert!(dev.contains("domain_todos=debug"));
        assert!(dev.contains("sqlx=info"));

        let prod = default_filter(&Environment::Production);
        assert!(prod.starts_with("warn"));
        assert!(prod.contains("todo_api=info"));
    }

    #[test]
    fn test_default_filters_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_filter(&env)).is_ok());
        }
    }

    #[test]
    fn test_rust_log_overrides_default() {
        temp_env::with_var("RUST_LOG", Some("domain_todos=trace"), || {
            let filter = build_filter(&Environment::Production);
            assert!(filter.to_string().contains("domain_todos=trace"));
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }
}
