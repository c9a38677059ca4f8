//! # Command-Line Interface
//!
//! The interactive record session and its terminal plumbing.
//!
//! ## Menu
//!
//! | Key | Command | Effect |
//! |-----|---------|--------|
//! | `1` | Create | Measure a plot, plan an input, register the record |
//! | `2` | List | Show every record with its index |
//! | `3` | Update | Re-enter a record at an index |
//! | `4` | Delete | Remove a record; later indices shift down |
//! | `5` | Export | Write all records to CSV |
//! | `0` | Exit | End the session |
//!
//! ## Output Formats
//!
//! The `--format` flag switches listings and status messages:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! Prompts and the menu itself are always plain text.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! farmtech --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod calculator;
mod menu;
mod output;
mod prompt;
mod session;

pub use app::{run, Cli};
pub use calculator::{compute_area, compute_input_quantity, CalcError};
pub use menu::MenuCommand;
pub use output::{Output, OutputFormat};
pub use prompt::{LinePrompt, Prompt, PromptError};
pub use session::{Session, SessionState};
