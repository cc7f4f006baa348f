//! Adapter wiring and one-shot runners

use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Duration;

use crate::application::ports::{
    ConfigStore, NotificationIcon, Notifier, PermissionGate, TextInserter,
};
use crate::application::{
    AccessibilityInsertion, InsertMethod, InsertOutput, InsertTextUseCase, PasteInsertion,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{ArboardClipboard, NoOpNotifier, NotifyRustNotifier, XdgConfigStore};

#[cfg(target_os = "macos")]
use crate::infrastructure::{AxPermissionGate, CgEventPaste, MacosAccessibility};
#[cfg(not(target_os = "macos"))]
use crate::infrastructure::{EnigoPaste, UnsupportedAccessibility, UnsupportedPermissionGate};

use super::args::{InsertOptions, PermissionAction};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Build the direct-insertion strategy for this platform.
#[cfg(target_os = "macos")]
pub(crate) fn accessibility_inserter() -> AccessibilityInsertion<AxPermissionGate, MacosAccessibility>
{
    AccessibilityInsertion::new(AxPermissionGate::new(), MacosAccessibility::new())
}

#[cfg(not(target_os = "macos"))]
pub(crate) fn accessibility_inserter(
) -> AccessibilityInsertion<UnsupportedPermissionGate, UnsupportedAccessibility> {
    AccessibilityInsertion::new(
        UnsupportedPermissionGate::new(),
        UnsupportedAccessibility::new(),
    )
}

/// Build the clipboard-and-paste fallback strategy for this platform.
#[cfg(target_os = "macos")]
pub(crate) fn paste_inserter() -> PasteInsertion<ArboardClipboard, CgEventPaste> {
    PasteInsertion::new(ArboardClipboard::new(), CgEventPaste::new())
}

#[cfg(not(target_os = "macos"))]
pub(crate) fn paste_inserter() -> PasteInsertion<ArboardClipboard, EnigoPaste> {
    PasteInsertion::new(ArboardClipboard::new(), EnigoPaste::new())
}

/// Build the permission gate for this platform.
pub(crate) fn permission_gate() -> impl PermissionGate {
    #[cfg(target_os = "macos")]
    {
        AxPermissionGate::new()
    }
    #[cfg(not(target_os = "macos"))]
    {
        UnsupportedPermissionGate::new()
    }
}

/// Build a notifier, no-op unless notifications were requested.
pub(crate) fn notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(NoOpNotifier::new())
    }
}

/// Resolve the text argument, reading stdin when it is "-".
pub fn read_text(arg: &str) -> io::Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(arg.to_string())
    }
}

/// Run a one-shot insertion
pub async fn run_insert(options: InsertOptions) -> ExitCode {
    let presenter = Presenter::new();
    let notifier = notifier(options.notify);

    if options.delay_ms > 0 {
        presenter.info(&format!(
            "Inserting in {} ms, focus the target field",
            options.delay_ms
        ));
        tokio::time::sleep(Duration::from_millis(options.delay_ms)).await;
    }

    let result = if options.fallback {
        InsertTextUseCase::new(accessibility_inserter(), paste_inserter())
            .insert(&options.text)
            .await
    } else {
        accessibility_inserter()
            .insert(&options.text)
            .await
            .map(|()| InsertOutput {
                method: InsertMethod::Accessibility,
                accessibility_error: None,
            })
    };

    match result {
        Ok(output) => {
            if let Some(err) = &output.accessibility_error {
                presenter.warn(&format!("Direct insertion unavailable: {}", err));
            }
            match output.method {
                InsertMethod::Accessibility => presenter.success("Inserted at the cursor"),
                InsertMethod::ClipboardPaste => presenter.success("Simulated a copy and paste"),
            }
            let _ = notifier
                .notify("Typedrop", "Text inserted", NotificationIcon::Success)
                .await;
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.info(e.recovery_suggestion());
            let _ = notifier
                .notify("Typedrop", &e.to_string(), NotificationIcon::Error)
                .await;
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Handle the permission subcommand
pub async fn run_permission(action: PermissionAction) -> ExitCode {
    let presenter = Presenter::new();
    let gate = permission_gate();

    match action {
        PermissionAction::Check => match gate.check() {
            Ok(()) => {
                presenter.success("Accessibility permission granted");
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        PermissionAction::Request => {
            gate.request();
            presenter.info("Requested accessibility permission; grant it in System Settings");
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_passes_literals_through() {
        assert_eq!(read_text("hello world").unwrap(), "hello world");
        assert_eq!(read_text("").unwrap(), "");
    }
}
