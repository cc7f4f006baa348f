//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::chord::HotkeyChord;

/// Typedrop - insert text into whichever application holds keyboard focus
#[derive(Parser, Debug)]
#[command(name = "typedrop")]
#[command(version)]
#[command(about = "Insert text into whichever application holds keyboard focus")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert text into the focused application once
    Insert {
        /// Text to insert, or "-" to read it from stdin
        text: String,

        /// Delay before inserting, to give time to focus the target (milliseconds)
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Fail with the accessibility error instead of falling back to paste
        #[arg(long)]
        no_fallback: bool,

        /// Show a desktop notification with the result
        #[arg(short = 'n', long)]
        notify: bool,
    },
    /// Wait for the hot-key and insert the configured snippet
    Listen {
        /// Text to insert on each hot-key press (overrides config)
        #[arg(short = 's', long, value_name = "TEXT")]
        snippet: Option<String>,

        /// Hot-key chord, e.g. shift+cmd+space (overrides config)
        #[arg(long, value_name = "CHORD")]
        hotkey: Option<String>,

        /// Show a desktop notification for each insertion
        #[arg(short = 'n', long)]
        notify: bool,
    },
    /// Check or request accessibility permission
    Permission {
        #[command(subcommand)]
        action: PermissionAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Permission subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum PermissionAction {
    /// Report whether accessibility permission is granted
    Check,
    /// Show the system prompt asking for accessibility permission
    Request,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed one-shot insertion options
#[derive(Debug, Clone)]
pub struct InsertOptions {
    pub text: String,
    pub delay_ms: u64,
    pub fallback: bool,
    pub notify: bool,
}

/// Parsed listen-mode options
#[derive(Debug, Clone)]
pub struct ListenOptions {
    pub snippet: String,
    pub chord: HotkeyChord,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["snippet", "delay_ms", "fallback", "notify", "hotkey"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_insert() {
        let cli = Cli::parse_from(["typedrop", "insert", "hello"]);
        if let Commands::Insert {
            text,
            delay_ms,
            no_fallback,
            notify,
        } = cli.command
        {
            assert_eq!(text, "hello");
            assert!(delay_ms.is_none());
            assert!(!no_fallback);
            assert!(!notify);
        } else {
            panic!("Expected Insert command");
        }
    }

    #[test]
    fn cli_parses_insert_flags() {
        let cli = Cli::parse_from([
            "typedrop",
            "insert",
            "hello",
            "--delay-ms",
            "2000",
            "--no-fallback",
            "-n",
        ]);
        if let Commands::Insert {
            delay_ms,
            no_fallback,
            notify,
            ..
        } = cli.command
        {
            assert_eq!(delay_ms, Some(2000));
            assert!(no_fallback);
            assert!(notify);
        } else {
            panic!("Expected Insert command");
        }
    }

    #[test]
    fn cli_parses_stdin_marker() {
        let cli = Cli::parse_from(["typedrop", "insert", "-"]);
        assert!(matches!(cli.command, Commands::Insert { text, .. } if text == "-"));
    }

    #[test]
    fn cli_parses_listen() {
        let cli = Cli::parse_from([
            "typedrop",
            "listen",
            "--snippet",
            "kind regards",
            "--hotkey",
            "ctrl+opt+p",
        ]);
        if let Commands::Listen {
            snippet, hotkey, ..
        } = cli.command
        {
            assert_eq!(snippet, Some("kind regards".to_string()));
            assert_eq!(hotkey, Some("ctrl+opt+p".to_string()));
        } else {
            panic!("Expected Listen command");
        }
    }

    #[test]
    fn cli_parses_permission_actions() {
        let cli = Cli::parse_from(["typedrop", "permission", "check"]);
        assert!(matches!(
            cli.command,
            Commands::Permission {
                action: PermissionAction::Check
            }
        ));

        let cli = Cli::parse_from(["typedrop", "permission", "request"]);
        assert!(matches!(
            cli.command,
            Commands::Permission {
                action: PermissionAction::Request
            }
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["typedrop", "config", "set", "snippet", "hello"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "snippet");
            assert_eq!(value, "hello");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("snippet"));
        assert!(is_valid_config_key("delay_ms"));
        assert!(is_valid_config_key("fallback"));
        assert!(is_valid_config_key("notify"));
        assert!(is_valid_config_key("hotkey"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
