//! Re-export a markdown file as JSON each time its edits settle.
//!
//! The watcher polls the file's text. A changed text is scheduled on a
//! [`Debouncer`]; only the text still pending after the quiet interval is run
//! through the pipeline, and the JSON output is rewritten only when that run
//! succeeds.

use std::{
    fs,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use log::{debug, info};

use mindgraph::{Debouncer, MindgraphError, Session, config::AppConfig};

use crate::error_adapter;

/// Markdown-to-JSON watcher state.
#[derive(Debug)]
pub struct Watcher {
    input: PathBuf,
    output: PathBuf,
    session: Session,
    debouncer: Debouncer<String>,
    last_seen: Option<String>,
}

impl Watcher {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, config: AppConfig) -> Self {
        let session = Session::new(config);
        let debouncer = session.pipeline().debouncer();
        Self {
            input: input.into(),
            output: output.into(),
            session,
            debouncer,
            last_seen: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read the input file and schedule its text if it changed since the last
    /// read. Returns whether a run was scheduled.
    ///
    /// # Errors
    ///
    /// Returns `MindgraphError::Io` if the file cannot be read.
    pub fn observe(&mut self, now: Instant) -> Result<bool, MindgraphError> {
        let text = fs::read_to_string(&self.input)?;
        if self.last_seen.as_deref() == Some(text.as_str()) {
            return Ok(false);
        }

        self.last_seen = Some(text.clone());
        if self.debouncer.schedule(text, now).is_some() {
            debug!("Pending run superseded by a newer edit");
        }
        Ok(true)
    }

    /// Run the pipeline if the pending text has settled. Returns whether the
    /// output file was rewritten.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error; the previous output is left in place.
    pub fn flush(&mut self, now: Instant) -> Result<bool, MindgraphError> {
        let Some(text) = self.debouncer.poll(now) else {
            return Ok(false);
        };

        if !self.session.apply_markdown(&text)? {
            return Ok(false);
        }

        let json = self.session.export_json()?;
        fs::write(&self.output, json)?;
        info!(output_file = self.output.display().to_string(); "JSON export updated");
        Ok(true)
    }

    /// Poll forever, reporting failed runs and carrying on.
    pub fn run(&mut self, poll: Duration) -> ! {
        info!(
            input_path = self.input.display().to_string(),
            quiet_ms = self.debouncer.quiet().as_millis();
            "Watching markdown file"
        );

        loop {
            let now = Instant::now();
            if let Err(err) = self.observe(now).and_then(|_| self.flush(now)) {
                error_adapter::report(&err);
            }
            thread::sleep(poll);
        }
    }
}
