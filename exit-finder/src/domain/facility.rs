//! Facility rows and display groups.

use std::fmt;

/// Status sentinel meaning the facility is fully operational.
///
/// Every other status value from the dataset ("보수중", "점검중", ...)
/// implies some form of outage.
pub const STATUS_AVAILABLE: &str = "사용가능";

/// One record from the facility dataset: a single elevator, escalator, or
/// wheelchair lift installation at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityRow {
    /// Station the facility belongs to (may carry a parenthetical line
    /// annotation, e.g. `"신설동(1호선)"`).
    pub station_name: String,

    /// Facility name as recorded upstream, e.g. `"엘리베이터 2호기"`.
    pub facility_name: String,

    /// Where the facility is installed, usually an exit reference like
    /// `"2번 출구"`.
    pub install_location: String,

    /// Free-text operational status. [`STATUS_AVAILABLE`] means working.
    pub status: String,
}

/// Recognized facility kinds, in display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityKind {
    Escalator,
    Elevator,
    WheelchairLift,
}

impl FacilityKind {
    /// The keyword-match priority used by [`FacilityKind::match_name`].
    ///
    /// A facility name containing several keywords resolves to the first
    /// kind in this list whose keyword it contains. The order is an
    /// explicit policy choice; see [`FacilityKind::match_name_in`] to use
    /// a different one.
    pub const DEFAULT_PRIORITY: [FacilityKind; 3] = [
        FacilityKind::Escalator,
        FacilityKind::Elevator,
        FacilityKind::WheelchairLift,
    ];

    /// The substring that identifies this kind in upstream facility names.
    pub fn keyword(&self) -> &'static str {
        match self {
            FacilityKind::Escalator => "에스컬레이터",
            FacilityKind::Elevator => "엘리베이터",
            FacilityKind::WheelchairLift => "휠체어",
        }
    }

    /// Display label for grouped rows.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityKind::Escalator => "에스컬레이터",
            FacilityKind::Elevator => "엘리베이터",
            FacilityKind::WheelchairLift => "휠체어 리프트",
        }
    }

    /// Classify a facility name using the default priority order.
    ///
    /// Returns `None` for names matching no recognized keyword; such rows
    /// are dropped before grouping.
    pub fn match_name(name: &str) -> Option<FacilityKind> {
        Self::match_name_in(&Self::DEFAULT_PRIORITY, name)
    }

    /// Classify a facility name using an explicit priority order.
    pub fn match_name_in(priority: &[FacilityKind], name: &str) -> Option<FacilityKind> {
        priority
            .iter()
            .copied()
            .find(|kind| name.contains(kind.keyword()))
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One display row: all facilities of a kind at a station, merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityGroup {
    /// Normalized facility kind for the group.
    pub kind: FacilityKind,

    /// Distinct install locations in first-seen order, comma-joined.
    pub location: String,

    /// Distinct statuses in first-seen order, comma-joined.
    pub status: String,
}
