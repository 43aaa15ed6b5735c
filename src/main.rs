//! Teams Notify CLI
//!
//! 作为 GitHub Actions step 运行：读取触发事件，发送 Teams Adaptive Card 通知

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use teams_notify::cli::{handle_notify, NotifyArgs};
use teams_notify::host;

#[derive(Parser)]
#[command(name = "teams-notify")]
#[command(about = "Teams Notify - 将 GitHub 事件发送到 Microsoft Teams")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    notify: NotifyArgs,
}

#[tokio::main]
async fn main() {
    // 日志写到 stderr，stdout 留给 workflow command
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("teams_notify=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = handle_notify(cli.notify).await {
        error!(error = %e, "Notification failed");
        host::set_failed(&e.to_string());
        std::process::exit(1);
    }
}
