//! Result filtering and aggregation.
//!
//! Pure transformation from the fetched facility rows to the display
//! model: one group per facility kind, only facilities that are not fully
//! operational, plus the station label shown above the list.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{FacilityGroup, FacilityKind, FacilityRow, STATUS_AVAILABLE};

/// Label shown when the search produced no rows at all.
pub const NO_RESULT_LABEL: &str = "검색 결과 없음";

/// Parenthetical annotations in station names, e.g. `"신설동(1호선)"`.
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*\)").unwrap());

/// Exit-number tokens inside a location string: `"1"`, `"4-1"`, ...
static EXIT_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:-\d+)?").unwrap());

/// Aggregated display model for one query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    /// Station label, with an outage-count suffix when groups exist.
    pub label: String,

    /// One row per facility kind with at least one non-operational unit.
    pub groups: Vec<FacilityGroup>,

    /// True when recognized facilities exist but every one is operational.
    /// False for an empty input row set, so "all working" and "no results"
    /// stay distinguishable.
    pub all_working: bool,
}

/// Build the display summary from a fetched row set.
///
/// Deterministic and side-effect free: same rows in, same summary out.
pub fn summarize(rows: &[FacilityRow]) -> StationSummary {
    let Some(first) = rows.first() else {
        return StationSummary {
            label: NO_RESULT_LABEL.to_string(),
            groups: Vec::new(),
            all_working: false,
        };
    };

    let station = PAREN_RE.replace_all(&first.station_name, "").into_owned();

    let recognized: Vec<&FacilityRow> = rows
        .iter()
        .filter(|row| FacilityKind::match_name(&row.facility_name).is_some())
        .collect();

    let out_of_service: Vec<&FacilityRow> = recognized
        .iter()
        .copied()
        .filter(|row| row.status != STATUS_AVAILABLE)
        .collect();

    let groups = group_rows(&out_of_service);
    let all_working = groups.is_empty() && !recognized.is_empty();

    let label = if groups.is_empty() {
        station
    } else {
        format!("{station}(총 {}곳)", badge_count(&groups))
    };

    StationSummary {
        label,
        groups,
        all_working,
    }
}

/// Group rows by facility kind, preserving first-seen group order, and
/// merge each group's locations and statuses.
fn group_rows(rows: &[&FacilityRow]) -> Vec<FacilityGroup> {
    let mut order: Vec<FacilityKind> = Vec::new();
    let mut buckets: HashMap<FacilityKind, Vec<&FacilityRow>> = HashMap::new();

    for &row in rows {
        let Some(kind) = FacilityKind::match_name(&row.facility_name) else {
            continue;
        };
        if !buckets.contains_key(&kind) {
            order.push(kind);
        }
        buckets.entry(kind).or_default().push(row);
    }

    order
        .into_iter()
        .map(|kind| {
            let members = &buckets[&kind];
            FacilityGroup {
                kind,
                location: join_distinct(members.iter().map(|r| r.install_location.as_str())),
                status: join_distinct(members.iter().map(|r| r.status.as_str())),
            }
        })
        .collect()
}

/// Join distinct values with `", "` in first-seen order.
fn join_distinct<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen.join(", ")
}

/// Count the exit badges a group list would render: one per extractable
/// exit-number token, and one for a group whose location yields none.
fn badge_count(groups: &[FacilityGroup]) -> usize {
    groups
        .iter()
        .map(|group| {
            let tokens = EXIT_TOKEN_RE.find_iter(&group.location).count();
            if tokens == 0 { 1 } else { tokens }
        })
        .sum()
}
