use club_geocoder::{config, error, pipeline};
use config::Config;
use error::ClubGeoError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // ログは標準エラーへ（標準出力は集計のみ）
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();

    match pipeline::run(&config).await {
        Ok(summary) => {
            println!(
                "Generated {} with {} clubs.",
                config.output_path.display(),
                summary.total
            );
            println!(
                "Missing coords: {} (see {})",
                summary.missing,
                config.report_path.display()
            );
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(ClubGeoError::EXIT_CODE)
        }
    }
}
