// Interactive session: control changes in, freshly built page out

use crate::config::DashboardConfig;
use crate::data;
use crate::error::DashboardError;
use crate::models::{Method, K};
use crate::render;
use crate::views::{build_page, KSlider, Page, UiState};
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

/// One widget change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SetK(K),
    SetMethod(Method),
    ShowRecommended(bool),
    /// Re-render without changing anything
    Show,
    Quit,
}

impl FromStr for Control {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        match (command.as_str(), argument) {
            ("k", Some(value)) => value
                .parse::<K>()
                .map(Control::SetK)
                .map_err(|e| format!("invalid k '{}': {}", value, e)),
            ("method", Some(value)) => value.parse::<Method>().map(Control::SetMethod),
            ("recommended", Some("on")) => Ok(Control::ShowRecommended(true)),
            ("recommended", Some("off")) => Ok(Control::ShowRecommended(false)),
            ("show", None) => Ok(Control::Show),
            ("quit", None) | ("exit", None) => Ok(Control::Quit),
            _ => Err(format!(
                "unrecognized command '{}' (try: k <n>, method <ILP|GREEDY>, recommended <on|off>, show, quit)",
                s.trim()
            )),
        }
    }
}

/// Explicit state for an interactive run. Tables come from the process-wide
/// cache on every render, so only the first render reads disk.
pub struct Session {
    config: DashboardConfig,
    state: UiState,
}

impl Session {
    /// Loads the tables once and starts from the slider's default value
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        let study = data::load_cached(&config.data)?;
        let slider = KSlider::new(study.curve.max_k(), config.default_k);
        Ok(Self {
            config,
            state: UiState::initial(&slider),
        })
    }

    pub fn with_state(config: DashboardConfig, state: UiState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Applies a control change. Returns false when the session should end.
    pub fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::SetK(k) => self.state.k = k,
            Control::SetMethod(method) => self.state.method = method,
            Control::ShowRecommended(show) => self.state.show_recommended = show,
            Control::Show => {}
            Control::Quit => return false,
        }
        true
    }

    pub fn page(&self) -> Result<Page, DashboardError> {
        let study = data::load_cached(&self.config.data)?;
        Ok(build_page(&study, &self.state, &self.config))
    }

    /// Renders the current page into `output_dir` and returns its text summary
    pub fn render(&self, output_dir: &Path) -> Result<String, DashboardError> {
        let page = self.page()?;
        render::write_page(&page, output_dir)?;
        Ok(render::summary(&page))
    }

    /// Reads one control per line, re-rendering after each accepted change
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        output_dir: &Path,
    ) -> Result<(), DashboardError> {
        writeln!(output, "{}", self.render(output_dir)?).map_err(render_io)?;

        for line in input.lines() {
            let line = line.map_err(render_io)?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Control>() {
                Ok(control) => {
                    if !self.apply(control) {
                        break;
                    }
                    log::debug!("state is now {:?}", self.state);
                    writeln!(output, "{}", self.render(output_dir)?).map_err(render_io)?;
                }
                Err(message) => writeln!(output, "{}", message).map_err(render_io)?,
            }
        }
        Ok(())
    }
}

fn render_io(e: std::io::Error) -> DashboardError {
    DashboardError::Render(e.into())
}
