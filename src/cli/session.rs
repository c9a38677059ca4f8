//! Interactive session loop
//!
//! The session owns the record store and runs one menu command at a time,
//! including every nested prompt, before showing the menu again. User
//! mistakes are reported and the loop carries on; only Exit, or the input
//! closing, ends it.

use serde::Serialize;

use super::calculator::{compute_area, compute_input_quantity, CalcError};
use super::menu::MenuCommand;
use super::output::Output;
use super::prompt::{Prompt, PromptError};
use crate::domain::{CropVariant, Record, RecordError};
use crate::storage::{CsvExporter, ExportError, RecordStore};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[derive(Serialize)]
struct ListedRecord<'a> {
    index: usize,
    #[serde(flatten)]
    record: &'a Record,
}

/// Menu-driven record session
pub struct Session<P> {
    prompt: P,
    output: Output,
    exporter: CsvExporter,
    store: RecordStore,
    decimals: usize,
    state: SessionState,
}

impl<P: Prompt> Session<P> {
    /// Creates a running session with an empty store
    pub fn new(prompt: P, exporter: CsvExporter, output: Output) -> Self {
        Self {
            prompt,
            output,
            exporter,
            store: RecordStore::new(),
            decimals: 2,
            state: SessionState::Running,
        }
    }

    /// Sets the decimal places used when listing
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs until Exit is chosen or the input closes
    pub fn run(&mut self) -> Result<(), PromptError> {
        while self.state == SessionState::Running {
            match self.step() {
                Ok(()) => {}
                Err(PromptError::Closed) => {
                    self.output.verbose_ctx("session", "Input closed, ending session");
                    self.state = SessionState::Terminated;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Shows the menu, reads one command and carries it out
    pub fn step(&mut self) -> Result<(), PromptError> {
        for line in MenuCommand::menu_lines() {
            self.prompt.say(&line)?;
        }

        let raw = self.prompt.ask("Choose an option: ")?;
        match raw.parse::<MenuCommand>() {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                self.output.error(&e.to_string());
                Ok(())
            }
        }
    }

    /// Carries out a single command
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<(), PromptError> {
        self.output.verbose_ctx("session", &format!("Command: {:?}", command));

        match command {
            MenuCommand::Create => self.create()?,
            MenuCommand::List => self.list()?,
            MenuCommand::Update => self.update()?,
            MenuCommand::Delete => self.delete()?,
            MenuCommand::Export => self.export(),
            MenuCommand::Exit => {
                self.output.info("Exiting the program...");
                self.state = SessionState::Terminated;
            }
        }
        Ok(())
    }

    fn create(&mut self) -> Result<(), PromptError> {
        if let Some(record) = self.collect_record("Crop (corn/soybean): ")? {
            let index = self.store.append(record);
            self.output.verbose_ctx("store", &format!("Appended record at index {}", index));
            self.output.success("Record registered successfully!");
        }
        Ok(())
    }

    fn list(&mut self) -> Result<(), PromptError> {
        if self.output.is_json() {
            if self.store.is_empty() {
                self.output.info("No records registered.");
            } else {
                let items: Vec<_> = self
                    .store
                    .iter()
                    .map(|(index, record)| ListedRecord { index, record })
                    .collect();
                self.output.data(&items);
            }
            return Ok(());
        }

        self.prompt.say("")?;
        self.prompt.say("--- Registered Data ---")?;
        if self.store.is_empty() {
            return self.prompt.say("No records registered.");
        }

        let p = self.decimals;
        for (index, record) in self.store.iter() {
            self.prompt.say(&format!(
                "[{}] Crop: {}, Area: {:.p$} m², Input: {}, Quantity: {:.p$} L/Kg",
                index,
                record.crop(),
                record.area_m2(),
                record.input_name(),
                record.input_quantity(),
            ))?;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), PromptError> {
        let Some(index) = self.ask_index("Index to update: ")? else {
            return Ok(());
        };

        if let Some(current) = self.store.get(index) {
            self.output
                .info(&format!("Updating record for crop {}", current.crop()));
        }

        if let Some(record) = self.collect_record("New crop (corn/soybean): ")? {
            match self.store.update(index, record) {
                Ok(_) => {
                    self.output.verbose_ctx("store", &format!("Replaced record at index {}", index));
                    self.output.success("Record updated successfully!");
                }
                Err(e) => self.output.error(&e.to_string()),
            }
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), PromptError> {
        let Some(index) = self.ask_index("Index to delete: ")? else {
            return Ok(());
        };

        match self.store.delete(index) {
            Ok(_) => {
                self.output.verbose_ctx(
                    "store",
                    &format!("Removed index {}, {} record(s) left", index, self.store.len()),
                );
                self.output.success("Record deleted successfully!");
            }
            Err(e) => self.output.error(&e.to_string()),
        }
        Ok(())
    }

    fn export(&self) {
        match self.exporter.export(&self.store) {
            Ok(summary) => {
                self.output.verbose_ctx("export", &format!("Wrote {} row(s)", summary.rows));
                self.output.success(&format!(
                    "Data saved to '{}' successfully!",
                    summary.path.display()
                ));
            }
            Err(ExportError::NoData) => self.output.error(&RecordError::NoDataToExport.to_string()),
            Err(e) => self.output.error(&e.to_string()),
        }
    }

    /// Reads an index and resolves it against the store, reporting failures
    fn ask_index(&mut self, message: &str) -> Result<Option<usize>, PromptError> {
        let raw = self.prompt.ask(message)?;
        match self.store.resolve_index(&raw) {
            Ok(index) => Ok(Some(index)),
            Err(e) => {
                self.output.error(&e.to_string());
                Ok(None)
            }
        }
    }

    /// Runs the crop, area and input prompts.
    ///
    /// The input prompts are skipped entirely when no positive area came
    /// out. Returns `None` whenever nothing should be committed.
    fn collect_record(&mut self, crop_message: &str) -> Result<Option<Record>, PromptError> {
        let crop_raw = self.prompt.ask(crop_message)?;
        let crop = CropVariant::parse(&crop_raw);

        let area = compute_area(&crop, &mut self.prompt);
        let Some(area) = self.recover(area)? else {
            return Ok(None);
        };
        self.output
            .verbose_ctx("area", &format!("{} plot: {} m²", crop, area));

        if area <= 0.0 {
            self.output.info("Plot area is zero; nothing was registered.");
            return Ok(None);
        }

        let input = compute_input_quantity(&mut self.prompt);
        let Some(input) = self.recover(input)? else {
            return Ok(None);
        };
        self.output.info(&format!(
            "Will need {:.2} Liters/Kg of {}.",
            input.quantity, input.name
        ));

        match Record::new(crop_raw.trim(), area, input) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                self.output.error(&e.to_string());
                Ok(None)
            }
        }
    }

    /// Reports a recoverable calculator error, passing prompt failures up
    fn recover<T>(&self, result: Result<T, CalcError>) -> Result<Option<T>, PromptError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(CalcError::Record(e)) => {
                self.output.error(&e.to_string());
                Ok(None)
            }
            Err(CalcError::Prompt(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::LinePrompt;
    use crate::cli::OutputFormat;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestSession = Session<LinePrompt<Cursor<Vec<u8>>, Vec<u8>>>;

    fn session(dir: &TempDir, script: &str) -> TestSession {
        let prompt = LinePrompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let exporter = CsvExporter::new(dir.path().join("dados_culturas.csv"));
        Session::new(prompt, exporter, Output::new(OutputFormat::Text, false))
    }

    fn run(dir: &TempDir, script: &str) -> TestSession {
        let mut s = session(dir, script);
        s.run().unwrap();
        s
    }

    fn transcript(s: TestSession) -> String {
        String::from_utf8(s.prompt.into_writer()).unwrap()
    }

    #[test]
    fn exit_terminates() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "0\n");

        assert_eq!(s.state(), SessionState::Terminated);
        assert!(s.store().is_empty());
    }

    #[test]
    fn closed_input_terminates() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n10\n");

        assert_eq!(s.state(), SessionState::Terminated);
        assert!(s.store().is_empty());
    }

    #[test]
    fn create_commits_corn_record() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n4\n25\nNPK\n1\n2\n50\n0\n");

        assert_eq!(s.store().len(), 1);
        let record = s.store().get(0).unwrap();
        assert_eq!(record.crop(), "corn");
        assert!((record.area_m2() - 100.0).abs() < 1e-9);
        assert_eq!(record.input_name(), "NPK");
        assert!((record.input_quantity() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn create_commits_soybean_record() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\nSoja\n10\nUreia\n2\n4\n50\n0\n");

        let record = s.store().get(0).unwrap();
        assert_eq!(record.crop(), "Soja");
        assert!((record.area_m2() - 314.159).abs() < 1e-9);
        assert!((record.input_quantity() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn unregistered_crop_commits_nothing_and_skips_input_prompts() {
        let dir = TempDir::new().unwrap();
        // Input answers are supplied but must be read as menu choices instead
        let s = run(&dir, "1\nwheat\nNPK\n1\n2\n50\n0\n");

        assert!(s.store().is_empty());
        assert_eq!(s.state(), SessionState::Terminated);
        assert!(!transcript(s).contains("Input name: "));
    }

    #[test]
    fn zero_area_skips_input_prompts() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n0\n25\n0\n");

        assert!(s.store().is_empty());
        assert!(!transcript(s).contains("Input name: "));
    }

    #[test]
    fn failed_input_calculation_commits_nothing() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n4\n25\nNPK\nlots\n0\n");

        assert!(s.store().is_empty());
        assert_eq!(s.state(), SessionState::Terminated);
    }

    #[test]
    fn overflowing_area_skips_input_prompts() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n1e200\n1e200\n0\n");

        assert!(s.store().is_empty());
        assert!(!transcript(s).contains("Input name: "));
    }

    #[test]
    fn list_shows_records_in_transcript() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n4\n25\nNPK\n1\n2\n50\n2\n0\n");

        let shown = transcript(s);
        assert!(shown.contains("--- Registered Data ---"));
        assert!(shown.contains("[0] Crop: corn, Area: 100.00 m², Input: NPK, Quantity: 0.10 L/Kg"));
    }

    #[test]
    fn list_of_empty_store_says_so() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "2\n0\n");
        assert!(transcript(s).contains("No records registered."));
    }

    #[test]
    fn list_honours_decimals() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "1\nsoja\n10\nUreia\n2\n4\n50\n2\n0\n").with_decimals(3);
        s.run().unwrap();
        assert!(transcript(s).contains("Area: 314.159 m², Input: Ureia, Quantity: 0.400 L/Kg"));
    }

    #[test]
    fn update_replaces_record() {
        let dir = TempDir::new().unwrap();
        let s = run(
            &dir,
            "1\ncorn\n4\n25\nNPK\n1\n2\n50\n\
             3\n0\nsoybean\n1\nUreia\n10\n1\n10\n0\n",
        );

        assert_eq!(s.store().len(), 1);
        let record = s.store().get(0).unwrap();
        assert_eq!(record.crop(), "soybean");
        assert_eq!(record.input_name(), "Ureia");
        assert!((record.input_quantity() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn failing_update_keeps_original() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "1\ncorn\n4\n25\nNPK\n1\n2\n50\n");
        s.run().unwrap();
        let original = s.store().get(0).unwrap().clone();

        // Area succeeds, input quantity fails on the row count
        let prompt = LinePrompt::new(
            Cursor::new(b"3\n0\ncorn\n10\n10\nNPK\n1\nmany\n0\n".to_vec()),
            Vec::new(),
        );
        let mut s = Session {
            prompt,
            state: SessionState::Running,
            ..s
        };
        s.run().unwrap();

        assert_eq!(s.store().len(), 1);
        assert_eq!(s.store().get(0), Some(&original));
    }

    #[test]
    fn update_with_bad_index_asks_nothing_else() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "3\n0\n0\n");

        // "0" is out of range on an empty store, then "0" exits
        assert_eq!(s.state(), SessionState::Terminated);
        assert!(!transcript(s).contains("New crop"));
    }

    #[test]
    fn delete_shifts_indices() {
        let dir = TempDir::new().unwrap();
        let s = run(
            &dir,
            "1\ncorn\n1\n1\nA\n1\n1\n1\n\
             1\ncorn\n2\n1\nB\n1\n1\n1\n\
             1\ncorn\n3\n1\nC\n1\n1\n1\n\
             4\n0\n0\n",
        );

        let names: Vec<_> = s.store().iter().map(|(_, r)| r.input_name().to_string()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn delete_with_non_numeric_index_is_noop() {
        let dir = TempDir::new().unwrap();
        let s = run(&dir, "1\ncorn\n1\n1\nA\n1\n1\n1\n4\nfirst\n0\n");
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn invalid_option_keeps_running() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "9\n");
        s.step().unwrap();
        assert_eq!(s.state(), SessionState::Running);
    }

    #[test]
    fn export_writes_file() {
        let dir = TempDir::new().unwrap();
        run(&dir, "1\ncorn\n4\n25\nNPK\n1\n2\n50\n5\n0\n");

        let bytes = fs::read(dir.path().join("dados_culturas.csv")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert!(text.contains("corn,100.0,NPK,0.1"));
    }

    #[test]
    fn export_of_empty_store_writes_nothing() {
        let dir = TempDir::new().unwrap();
        run(&dir, "5\n0\n");
        assert!(!dir.path().join("dados_culturas.csv").exists());
    }

    #[test]
    fn end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "");

        fn feed(s: &mut TestSession, script: &str) {
            s.prompt = LinePrompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
            s.step().unwrap();
        }

        feed(&mut s, "1\ncorn\n4\n25\nNPK\n1\n2\n50\n");
        let record = s.store().get(0).unwrap();
        assert_eq!(record.crop(), "corn");
        assert_eq!(record.area_m2(), 100.0);
        assert_eq!(record.input_name(), "NPK");
        assert!((record.input_quantity() - 0.1).abs() < 1e-12);

        feed(&mut s, "2\n");
        assert_eq!(s.store().len(), 1);

        feed(&mut s, "4\n0\n");
        assert!(s.store().is_empty());

        feed(&mut s, "5\n");
        assert!(!dir.path().join("dados_culturas.csv").exists());
        assert_eq!(s.state(), SessionState::Running);
    }
}
