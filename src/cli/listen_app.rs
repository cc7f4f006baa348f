//! Listen-mode runner: the hot-key loop around the insertion use case

use std::process::ExitCode;

use super::args::ListenOptions;
use super::presenter::Presenter;

#[cfg(target_os = "macos")]
use std::time::Duration;

#[cfg(target_os = "macos")]
use tokio::sync::mpsc;

#[cfg(target_os = "macos")]
use crate::application::ports::{HotkeyListener, NotificationIcon, Notifier, TextInserter};
#[cfg(target_os = "macos")]
use crate::application::{InsertMethod, InsertTextUseCase, PermissionMonitor};
#[cfg(target_os = "macos")]
use crate::infrastructure::{AxPermissionGate, DeviceQueryHotkey};

#[cfg(target_os = "macos")]
use super::app::{accessibility_inserter, notifier, paste_inserter, EXIT_SUCCESS, EXIT_USAGE_ERROR};
#[cfg(not(target_os = "macos"))]
use super::app::EXIT_ERROR;

/// How often the permission monitor re-checks the trust state.
#[cfg(target_os = "macos")]
const PERMISSION_POLL: Duration = Duration::from_secs(2);

/// Run the hot-key listen loop until Ctrl-C.
#[cfg(target_os = "macos")]
pub async fn run_listen(options: ListenOptions) -> ExitCode {
    let presenter = Presenter::new();

    let listener = match DeviceQueryHotkey::new(options.chord) {
        Ok(listener) => listener,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let use_case = InsertTextUseCase::new(accessibility_inserter(), paste_inserter());
    let notifier = notifier(options.notify);

    let monitor = PermissionMonitor::start(AxPermissionGate::new(), PERMISSION_POLL);
    let mut permission_rx = monitor.subscribe();
    if !monitor.granted() {
        presenter.warn("Accessibility permission not granted; insertions will fall back to paste");
    }

    presenter.info(&format!(
        "Listening for {}. Press Ctrl-C to stop.",
        options.chord
    ));

    let (chord_tx, mut chord_rx) = mpsc::channel::<()>(1);
    let hotkey_task = tokio::spawn(async move {
        loop {
            if listener.wait_for_chord().await.is_err() {
                break;
            }
            if chord_tx.send(()).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                presenter.info("Stopping");
                break;
            }
            changed = permission_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                if *permission_rx.borrow() {
                    presenter.success("Accessibility permission granted");
                } else {
                    presenter.warn(
                        "Accessibility permission revoked; insertions will fall back to paste",
                    );
                }
            }
            received = chord_rx.recv() => {
                if received.is_none() {
                    break;
                }
                handle_chord(&presenter, &use_case, notifier.as_ref(), &options.snippet).await;
            }
        }
    }

    monitor.stop();
    hotkey_task.abort();
    ExitCode::from(EXIT_SUCCESS)
}

/// Insert the snippet once and report the outcome.
#[cfg(target_os = "macos")]
async fn handle_chord<P, F>(
    presenter: &Presenter,
    use_case: &InsertTextUseCase<P, F>,
    notifier: &dyn Notifier,
    snippet: &str,
) where
    P: TextInserter,
    F: TextInserter,
{
    match use_case.insert(snippet).await {
        Ok(output) => {
            match output.method {
                InsertMethod::Accessibility => presenter.success("Inserted at the cursor"),
                InsertMethod::ClipboardPaste => presenter.success("Simulated a copy and paste"),
            }
            let _ = notifier
                .notify("Typedrop", "Text inserted", NotificationIcon::Success)
                .await;
        }
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.info(e.recovery_suggestion());
            let _ = notifier
                .notify("Typedrop", &e.to_string(), NotificationIcon::Error)
                .await;
        }
    }
}

/// Listen mode needs the macOS input monitor.
#[cfg(not(target_os = "macos"))]
pub async fn run_listen(options: ListenOptions) -> ExitCode {
    let presenter = Presenter::new();
    let _ = options;
    presenter.error("Listen mode requires the macOS hot-key monitor; use 'typedrop insert'");
    ExitCode::from(EXIT_ERROR)
}
