pub mod admission;
pub mod chart;
pub mod geocode;
pub mod view;

pub use admission::{count_from_value, AdmissionRecord, FeedRow, RecordKind};
pub use chart::{ChartDataset, ChartKind, ChartOptions, ChartSpec};
pub use geocode::{BoundingBox, GeocodeMatch, RawPlace};
pub use view::{NormalizedQuery, ViewParameters};
