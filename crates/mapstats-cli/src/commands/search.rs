//! Search command implementation

use crate::cli::SearchArgs;
use crate::config_loader::load_config_with_overrides;
use crate::errors;
use crate::interactive::prompt_query;
use crate::output::OutputWriter;
use crate::progress::fetch_spinner;
use crate::sinks::{TerminalNotifier, TerminalViewSink};
use anyhow::Result;
use mapstats_search::{NominatimClient, SearchOutcome, SearchPipeline, ViewParameterBuilder};
use std::path::Path;

/// Words that end an interactive session
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

type TerminalPipeline = SearchPipeline<NominatimClient, TerminalViewSink, TerminalNotifier>;

pub async fn execute(args: SearchArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config_with_overrides(config_path, args.overrides())?;
    let settings = config.search_settings();
    let endpoint = settings.geocode_endpoint.clone();

    let client = NominatimClient::from_settings(&settings)?;
    let builder = ViewParameterBuilder::from_settings(&settings);

    match args.query_text() {
        Some(query) if !args.interactive => {
            let spinner = fetch_spinner(output, "Searching...");
            let pipeline = SearchPipeline::new(
                client,
                builder,
                TerminalViewSink::new(*output).with_progress(spinner.clone()),
                TerminalNotifier::new(*output).with_progress(spinner.clone()),
            );

            let outcome = pipeline.submit(&query).await;
            spinner.finish_and_clear();

            match outcome {
                SearchOutcome::Failed(err) => Err(errors::search_failed(&err, &endpoint).into()),
                _ => Ok(()),
            }
        }
        initial => {
            let pipeline = SearchPipeline::new(
                client,
                builder,
                TerminalViewSink::new(*output),
                TerminalNotifier::new(*output),
            );
            run_interactive(&pipeline, initial, output, &endpoint).await
        }
    }
}

/// Keep prompting for searches until the user types an exit word
async fn run_interactive(
    pipeline: &TerminalPipeline,
    initial: Option<String>,
    output: &OutputWriter,
    endpoint: &str,
) -> Result<()> {
    if !output.is_json() {
        output.info(format!("Type a place to search, or '{}' to leave", EXIT_WORDS[0]));
    }

    if let Some(query) = initial {
        report(pipeline.submit(&query).await, endpoint);
    }

    loop {
        let query = prompt_query()?;
        if EXIT_WORDS.contains(&query.trim().to_lowercase().as_str()) {
            return Ok(());
        }
        report(pipeline.submit(&query).await, endpoint);
    }
}

/// A failed search is shown but does not end the session
fn report(outcome: SearchOutcome, endpoint: &str) {
    if let SearchOutcome::Failed(err) = outcome {
        errors::search_failed(&err, endpoint).display();
    }
}
