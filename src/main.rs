use std::process::ExitCode;

use colour_strain::config::Config;
use colour_strain::logging::{init_tracing, LogConfig};
use colour_strain::replay::replay_file;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    if let Err(e) = init_tracing(&LogConfig::from(&config)) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let Some(input) = std::env::args().nth(1).or_else(|| config.replay_input.clone()) else {
        tracing::error!("No input stream given; pass a path or set REPLAY_INPUT");
        return ExitCode::from(2);
    };

    tracing::info!(input = %input, "Replaying colour strain");

    let report = match replay_file(&input) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, input = %input, "Replay failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        events = report.event_count,
        scored = report.scored_count,
        peak = report.peak_strain,
        "Replay complete"
    );

    let rendered = if config.replay_pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialise report");
            ExitCode::FAILURE
        }
    }
}
