use std::process::ExitCode;

use clap::Parser;

use reelmark::cli::Cli;
use reelmark::runtime::lifetime::startup::prepare_config;
use reelmark::runtime::modes::run_cli;
use reelmark::system::init_logging;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = prepare_config(cli.config.as_deref(), cli.data_dir.clone());

    // 日志初始化失败不影响命令执行
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[WARN] {}", e);
            None
        }
    };

    match run_cli(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}
