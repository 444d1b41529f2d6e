//! Terminal and file implementations of the presentation ports

use indicatif::ProgressBar;
use mapstats_core::models::{ChartSpec, ViewParameters};
use mapstats_core::ports::{ChartSink, Notifier, ViewSink};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::output::OutputWriter;
use crate::output_types::{ChartOutput, SearchOutput};

/// Prints the map view and permalink
pub struct TerminalViewSink {
    output: OutputWriter,
    progress: ProgressBar,
}

impl TerminalViewSink {
    pub fn new(output: OutputWriter) -> Self {
        Self {
            output,
            progress: ProgressBar::hidden(),
        }
    }

    /// Clear this spinner before printing
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }
}

impl ViewSink for TerminalViewSink {
    fn show(&self, view: &ViewParameters) {
        self.progress.finish_and_clear();

        if self.output.is_json() {
            if let Err(e) = self.output.result(SearchOutput::from(view)) {
                tracing::error!(error = %e, "Failed to write search result");
            }
            return;
        }

        self.output.section("Map");
        if let Some(ref name) = view.place_name {
            self.output.kv("Place", name);
        }
        self.output.kv("Marker", format!("{}, {}", view.latitude(), view.longitude()));
        self.output.kv("Bounding box", &view.embed_bounding_box);
        self.output.kv("Embed", &view.embed_url);
        self.output.kv("Open map", &view.permalink);
    }
}

/// Shows user notifications as warnings
pub struct TerminalNotifier {
    output: OutputWriter,
    progress: ProgressBar,
}

impl TerminalNotifier {
    pub fn new(output: OutputWriter) -> Self {
        Self {
            output,
            progress: ProgressBar::hidden(),
        }
    }

    /// Clear this spinner before notifying
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        self.progress.finish_and_clear();
        self.output.warning(message);
    }
}

/// Writes each chart as a Chart.js configuration.
///
/// With an output directory the configuration lands in `<surface>.json`;
/// otherwise it is printed (human mode) or kept for the final JSON document.
pub struct ChartFileSink {
    output: OutputWriter,
    out_dir: Option<PathBuf>,
    progress: ProgressBar,
    rendered: Mutex<Vec<ChartOutput>>,
}

impl ChartFileSink {
    pub fn new(output: OutputWriter, out_dir: Option<PathBuf>) -> Self {
        Self {
            output,
            out_dir,
            progress: ProgressBar::hidden(),
            rendered: Mutex::new(Vec::new()),
        }
    }

    /// Clear this spinner before the first chart is drawn
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Charts rendered so far, in render order
    pub fn rendered(&self) -> Vec<ChartOutput> {
        self.rendered.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn write_file(&self, chart: &ChartSpec, contents: &str) -> Option<String> {
        let dir = self.out_dir.as_ref()?;
        let path = dir.join(format!("{}.json", chart.surface));

        match fs::create_dir_all(dir).and_then(|_| fs::write(&path, contents)) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Chart configuration written");
                Some(path.display().to_string())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to write chart");
                None
            }
        }
    }
}

impl ChartSink for ChartFileSink {
    fn render(&self, chart: &ChartSpec) {
        self.progress.finish_and_clear();

        let config = chart.chartjs_config();
        let contents = serde_json::to_string_pretty(&config).unwrap_or_else(|_| config.to_string());

        let path = self.write_file(chart, &contents);

        if !self.output.is_json() {
            match path {
                Some(ref path) => self.output.success(format!("{} → {}", chart.surface, path)),
                None if self.out_dir.is_none() => {
                    self.output.section(&chart.surface);
                    println!("{}", contents);
                }
                None => {}
            }
        }

        self.rendered.lock().unwrap_or_else(|e| e.into_inner()).push(ChartOutput {
            surface: chart.surface.clone(),
            kind: chart.kind,
            path,
            config,
        });
    }
}
