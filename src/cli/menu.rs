//! Main menu commands

use std::str::FromStr;

use crate::domain::RecordError;

/// One of the six menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Create,
    List,
    Update,
    Delete,
    Export,
    Exit,
}

impl MenuCommand {
    /// All commands in display order
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::Create,
        MenuCommand::List,
        MenuCommand::Update,
        MenuCommand::Delete,
        MenuCommand::Export,
        MenuCommand::Exit,
    ];

    /// Key typed to select this command
    pub fn key(&self) -> &'static str {
        match self {
            MenuCommand::Create => "1",
            MenuCommand::List => "2",
            MenuCommand::Update => "3",
            MenuCommand::Delete => "4",
            MenuCommand::Export => "5",
            MenuCommand::Exit => "0",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuCommand::Create => "Enter crop data",
            MenuCommand::List => "List registered data",
            MenuCommand::Update => "Update a record",
            MenuCommand::Delete => "Delete a record",
            MenuCommand::Export => "Save data to CSV",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Menu lines, heading first
    pub fn menu_lines() -> Vec<String> {
        let mut lines = vec![String::new(), "===== FARMTECH SOLUTIONS =====".to_string()];
        lines.extend(
            Self::ALL
                .iter()
                .map(|cmd| format!("{} - {}", cmd.key(), cmd.description())),
        );
        lines
    }
}

impl FromStr for MenuCommand {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.key() == key)
            .ok_or_else(|| RecordError::UnrecognizedCommand(key.to_string()))
    }
}
