//! Classification and demand ranking of admission records

use mapstats_core::config::DashboardSettings;
use mapstats_core::models::{AdmissionRecord, RecordKind};
use std::cmp::Reverse;

/// How many entries each chart keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    pub courses: usize,
    pub programs: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            courses: 6,
            programs: 5,
        }
    }
}

impl From<&DashboardSettings> for RankingLimits {
    fn from(settings: &DashboardSettings) -> Self {
        Self {
            courses: settings.course_limit,
            programs: settings.program_limit,
        }
    }
}

/// Records of one kind, highest demand first
pub type RankedSubset = Vec<AdmissionRecord>;

/// Split records into courses and programs, dropping every other kind.
///
/// Feed order is kept within each group.
pub fn classify(records: Vec<AdmissionRecord>) -> (Vec<AdmissionRecord>, Vec<AdmissionRecord>) {
    let mut courses = Vec::new();
    let mut programs = Vec::new();

    for record in records {
        match record.kind {
            RecordKind::Course => courses.push(record),
            RecordKind::Program => programs.push(record),
            RecordKind::Other(_) => {}
        }
    }

    (courses, programs)
}

/// Sort by descending demand score and keep the first `limit` records.
///
/// The sort is stable, so records with equal demand stay in feed order.
pub fn rank(mut records: Vec<AdmissionRecord>, limit: usize) -> RankedSubset {
    records.sort_by_key(|record| Reverse(record.demand_score()));
    records.truncate(limit);
    records
}

/// Rank both groups of a feed
pub fn rank_feed(records: Vec<AdmissionRecord>, limits: RankingLimits) -> (RankedSubset, RankedSubset) {
    let (courses, programs) = classify(records);
    (rank(courses, limits.courses), rank(programs, limits.programs))
}
