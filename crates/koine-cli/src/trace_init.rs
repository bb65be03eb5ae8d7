use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "koine_core=info,koine_cli=info";
const VERBOSE_FILTER: &str = "koine_core=debug,koine_cli=debug";

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for command output. `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    // try_init: a subscriber may already be installed (tests).
    let _ = if json {
        builder
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
    } else {
        builder.with_target(false).without_time().try_init()
    };
}
