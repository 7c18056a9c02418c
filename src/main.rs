use clap::Parser;
use tracing_subscriber::EnvFilter;
use tube_calculator::{app, config, ui_cli::CliArgs};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let cfg = config::load_or_default(&args.config)?;

    let default_level = if args.verbose { "debug" } else { cfg.log_level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app::run(&args, &cfg)?;
    Ok(())
}
