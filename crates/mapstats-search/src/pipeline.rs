use mapstats_core::models::{GeocodeMatch, NormalizedQuery, ViewParameters};
use mapstats_core::ports::{GeocodeClient, Notifier, ViewSink};
use mapstats_core::{MapstatsError, Result};

use crate::normalize::normalize_query;
use crate::select::select_place;
use crate::sequence::RequestSequencer;
use crate::view::ViewParameterBuilder;

/// Notification shown when the geocoder finds nothing
pub const NO_PLACE_FOUND: &str = "No place found!";

/// What happened to a single search submission
#[derive(Debug)]
pub enum SearchOutcome {
    /// The query was blank; nothing was requested
    Skipped,
    /// The geocoder returned no matches and the user was notified
    NoResults,
    /// The view sink was updated with these parameters
    Shown(ViewParameters),
    /// A newer submission started before this one resolved, so its result was dropped
    Superseded,
    /// The request or its response failed; the view was left unchanged
    Failed(MapstatsError),
}

impl SearchOutcome {
    pub fn view(&self) -> Option<&ViewParameters> {
        match self {
            SearchOutcome::Shown(view) => Some(view),
            _ => None,
        }
    }
}

/// Place search pipeline: query → geocode → first match → map view
pub struct SearchPipeline<G, V, N>
where
    G: GeocodeClient,
    V: ViewSink,
    N: Notifier,
{
    client: G,
    builder: ViewParameterBuilder,
    view_sink: V,
    notifier: N,
    sequencer: RequestSequencer,
}

impl<G, V, N> SearchPipeline<G, V, N>
where
    G: GeocodeClient,
    V: ViewSink,
    N: Notifier,
{
    /// Create a new search pipeline
    pub fn new(client: G, builder: ViewParameterBuilder, view_sink: V, notifier: N) -> Self {
        Self {
            client,
            builder,
            view_sink,
            notifier,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Handle one submission of the search form.
    ///
    /// Never fails: errors are logged and reported through the outcome.
    /// Overlapping submissions are allowed, and only the most recent one
    /// may update the view or notify the user.
    pub async fn submit(&self, raw_query: &str) -> SearchOutcome {
        let query = match normalize_query(raw_query) {
            Ok(query) => query,
            Err(_) => {
                tracing::debug!("Ignoring empty search query");
                return SearchOutcome::Skipped;
            }
        };

        let token = self.sequencer.issue();
        tracing::debug!(query = %query.text, request = token.value(), "Submitting place search");

        let result = match self.resolve(&query).await {
            Err(err) if !err.is_silent() => {
                tracing::error!(query = %query.text, error = %err, "Place search failed");
                return SearchOutcome::Failed(err);
            }
            other => other,
        };

        if !self.sequencer.is_latest(token) {
            tracing::debug!(request = token.value(), "Dropping superseded search response");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(view) => {
                self.view_sink.show(&view);
                tracing::info!(
                    query = %query.text,
                    bbox = %view.embed_bounding_box,
                    "Map view updated"
                );
                SearchOutcome::Shown(view)
            }
            Err(MapstatsError::NoResultsFound { .. }) => {
                self.notifier.notify(NO_PLACE_FOUND);
                SearchOutcome::NoResults
            }
            Err(err) => SearchOutcome::Failed(err),
        }
    }

    /// Geocode a query and derive the view for its best match
    async fn resolve(&self, query: &NormalizedQuery) -> Result<ViewParameters> {
        let places = self.client.search(query).await?;

        let place = select_place(&places).ok_or_else(|| MapstatsError::NoResultsFound {
            query: query.text.clone(),
        })?;

        let matched = GeocodeMatch::parse(place)?;
        Ok(self.builder.build(&matched))
    }
}
