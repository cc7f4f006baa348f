//! Typedrop CLI entry point

use std::process::ExitCode;

use clap::Parser;

use typedrop::cli::{
    app::{load_merged_config, read_text, run_insert, run_permission, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, InsertOptions, ListenOptions},
    config_cmd::handle_config_command,
    listen_app::run_listen,
    presenter::Presenter,
};
use typedrop::domain::config::AppConfig;
use typedrop::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Permission { action } => run_permission(action).await,
        Commands::Insert {
            text,
            delay_ms,
            no_fallback,
            notify,
        } => {
            let text = match read_text(&text) {
                Ok(text) => text,
                Err(e) => {
                    presenter.error(&format!("Failed to read stdin: {}", e));
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let cli_config = AppConfig {
                delay_ms,
                fallback: if no_fallback { Some(false) } else { None },
                notify: if notify { Some(true) } else { None },
                ..AppConfig::empty()
            };
            let config = load_merged_config(cli_config).await;

            run_insert(InsertOptions {
                text,
                delay_ms: config.delay_ms_or_default(),
                fallback: config.fallback_or_default(),
                notify: config.notify_or_default(),
            })
            .await
        }
        Commands::Listen {
            snippet,
            hotkey,
            notify,
        } => {
            let cli_config = AppConfig {
                snippet,
                hotkey,
                notify: if notify { Some(true) } else { None },
                ..AppConfig::empty()
            };
            let config = load_merged_config(cli_config).await;

            let Some(snippet) = config.snippet.clone() else {
                presenter.error(
                    "No snippet configured. Pass --snippet or run 'typedrop config set snippet <TEXT>'",
                );
                return ExitCode::from(EXIT_USAGE_ERROR);
            };

            let chord = match config.hotkey_chord() {
                Ok(chord) => chord,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            run_listen(ListenOptions {
                snippet,
                chord,
                notify: config.notify_or_default(),
            })
            .await
        }
    }
}
