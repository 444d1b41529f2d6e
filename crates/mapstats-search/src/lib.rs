//! Mapstats Search - Place search pipeline
//!
//! Turns a free-text query into the parameters of an embeddable map view:
//! normalize the query, geocode it, pick the best match, and derive the
//! embed URL and permalink.

pub mod nominatim;
pub mod normalize;
pub mod pipeline;
pub mod select;
pub mod sequence;
pub mod view;

// Re-export main types
pub use nominatim::NominatimClient;
pub use normalize::{decode_component, encode_component, normalize_query};
pub use pipeline::{SearchOutcome, SearchPipeline, NO_PLACE_FOUND};
pub use select::select_place;
pub use sequence::{RequestSequencer, RequestToken};
pub use view::{ViewParameterBuilder, MAP_LAYER};
