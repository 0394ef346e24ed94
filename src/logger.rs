use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI용 로거를 초기화한다. 표준 출력은 리포트에 쓰므로 로그는 stderr로 보낸다.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "infusion_roi_simulator=debug,warn"
    } else {
        "infusion_roi_simulator=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
