use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use topolib::BlockchainOs;
use topolib::config::SimConfig;
use tracing::info;

use crate::render;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    pub color: bool,
    pub log_dir: PathBuf,
    // used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            color: true,
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimConfig,
    pub terminal: TerminalConfig,
}

impl Config {
    /// Read a TOML config. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config: Config = toml::from_str(&fs::read_to_string(path)?)?;
        config.simulation.validate()?;
        Ok(config)
    }
    pub fn generate(path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(&Config::default())?;
        fs::write(path, config_str)?;
        println!("Default config generated at: {}", path.display());
        Ok(())
    }
}

/// What the terminal should do with one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Report(String),
    Clear,
    Exit,
    Skip,
}

pub struct Core {
    pub config: Config,
    os: BlockchainOs,
}

impl Core {
    pub fn new(config: Config) -> Result<Self> {
        let os = BlockchainOs::with_config(config.simulation.clone())?;
        info!(
            nodes = os.nodes().len(),
            version = %os.config().version,
            "simulation started"
        );
        Ok(Core { config, os })
    }
    pub fn welcome(&self) -> String {
        self.os.welcome_message()
    }
    /// `exit`, `quit` and `clear` belong to the terminal; everything else
    /// goes to the simulator.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Skip;
        }
        match line.to_lowercase().as_str() {
            "exit" | "quit" => Outcome::Exit,
            "clear" => Outcome::Clear,
            _ => Outcome::Report(self.os.process_command(line)),
        }
    }
    pub fn render(&self, report: &str) -> String {
        render::paint(report, self.config.terminal.color)
    }
    pub fn log_summary(&self) {
        info!(
            height = self.os.block_height(),
            transactions = self.os.ledger().len(),
            pending = self.os.ledger().pending_count(),
            outgoing = self.os.outgoing_vectors(),
            position = self.os.current_position(),
            "session closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn terminal_commands_are_intercepted() {
        let mut core = Core::new(Config::default()).unwrap();
        assert_eq!(core.handle("   "), Outcome::Skip);
        assert_eq!(core.handle("exit"), Outcome::Exit);
        assert_eq!(core.handle("QUIT"), Outcome::Exit);
        assert_eq!(core.handle("clear"), Outcome::Clear);
        match core.handle("node.info 1") {
            Outcome::Report(report) => assert!(report.contains("Node Information:")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn generated_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        Config::generate(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        fs::write(
            &path,
            "[simulation]\nnode_count = 5\ntx_id_scheme = \"uuid\"\n\n[terminal]\ncolor = false\n",
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.simulation.node_count, 5);
        assert_eq!(config.simulation.version, "1.0.4");
        assert!(!config.terminal.color);
        assert_eq!(config.terminal.log_level, "info");

        let mut core = Core::new(config).unwrap();
        match core.handle("vector.send 0 4 hi") {
            Outcome::Report(report) => assert!(report.contains("Vector Path: 0 → 1 → 2 → 3 → 4")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn empty_ring_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        fs::write(&path, "[simulation]\nnode_count = 0\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn oversized_ring_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        fs::write(&path, "[simulation]\nnode_count = 2000000\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("node_count must be at most"));
    }
}
