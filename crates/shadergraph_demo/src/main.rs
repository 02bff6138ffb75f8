// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader graph demo.
//!
//! Runs the startup sequence a shader editor would: registers the node
//! catalog, seeds a PBR shader wired into a split node, then simulates one
//! context-menu pick. The resulting menu and graph are written to the log.
//!
//! Usage: `shadergraph [CONFIG]`, or set `SHADERGRAPH_CONFIG`.

mod app;
mod config;

use app::DemoApp;
use config::DemoConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let path = DemoConfig::locate(std::env::args().skip(1));
    let creating = path.as_ref().is_some_and(|p| !p.exists());
    let loaded = match &path {
        Some(path) => DemoConfig::load_or_create(path),
        None => Ok(DemoConfig::default()),
    };

    // Fall back to defaults so logging can be set up before reporting
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (DemoConfig::default(), Some(e)),
    };

    let env_filter = log_filter(EnvFilter::from_default_env(), &config.log_directive);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Only a named file can fail to load
    if let (Some(e), Some(path)) = (load_error, &path) {
        tracing::error!("Failed to load config {}: {e}", path.display());
        std::process::exit(1);
    }

    if creating {
        if let Some(path) = &path {
            tracing::info!("Wrote default config to {}", path.display());
        }
    }

    tracing::info!("Starting shadergraph demo v{}", env!("CARGO_PKG_VERSION"));

    match DemoApp::startup(&config) {
        Ok(app) => app.log_summary(),
        Err(e) => {
            tracing::error!("Demo failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Add the demo's own info baseline and the configured directive to `base`
fn log_filter(base: EnvFilter, log_directive: &str) -> EnvFilter {
    let baseline = format!("{}=info", env!("CARGO_CRATE_NAME"));
    let mut filter = base.add_directive(baseline.parse().expect("crate name is a valid target"));
    match log_directive.parse::<Directive>() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Ignoring log directive {log_directive:?}: {e}"),
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_with(log_directive: &str) -> (bool, bool, bool) {
        let subscriber = tracing_subscriber::registry()
            .with(log_filter(EnvFilter::new(""), log_directive));
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "shadergraph::app", Level::INFO),
                tracing::enabled!(target: "shadergraph::app", Level::DEBUG),
                tracing::enabled!(target: "shadergraph_core::graph", Level::DEBUG),
            )
        })
    }

    #[test]
    fn test_default_directive_logs_demo_and_core() {
        let (app_info, app_debug, core_debug) = enabled_with(&DemoConfig::default().log_directive);
        assert!(app_info);
        assert!(app_debug);
        assert!(core_debug);
    }

    #[test]
    fn test_narrow_directive_keeps_demo_summary() {
        let (app_info, app_debug, _) = enabled_with("warn");
        assert!(app_info);
        assert!(!app_debug);
    }

    #[test]
    fn test_invalid_directive_is_ignored() {
        let (app_info, _, core_debug) = enabled_with("shadergraph_core=loud");
        assert!(app_info);
        assert!(!core_debug);
    }
}
