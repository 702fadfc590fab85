//! Presentation state holder.
//!
//! Owns the last query result, the station label, and the one-shot
//! events the UI consumes. Workflows (search by name, locate) run the
//! whole pipeline and write their outcome back here on completion. Two
//! concurrent workflows race last-write-wins; nothing sequences them.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{FacilityGroup, StationName};
use crate::event::Event;
use crate::facilities::{FacilityError, FacilitySource};
use crate::location::{Geolocator, LocationError};
use crate::places::{PlaceError, PlaceResolver};
use crate::summary::{StationSummary, summarize};

/// Validation message for blank search input.
pub const MSG_INPUT_STATION_NAME: &str = "역 이름을 입력해주세요.";

/// Initial station label before any lookup.
pub const LABEL_CURRENT_LOCATION: &str = "현재위치";

/// Station label after a failed location-triggered lookup.
pub const LABEL_LOCATION_UNKNOWN: &str = "위치 정보 없음";

/// Error prefix for search-triggered failures.
pub const SEARCH_FAILURE_PREFIX: &str = "검색 실패: ";

/// Error prefix for location-triggered failures.
pub const LOCATION_FAILURE_PREFIX: &str = "위치 또는 승강기 정보를 가져오는데 실패했습니다: ";

/// Wait ceiling for the one-shot device location fetch.
const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Any failure along the locate/search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Location(#[from] LocationError),

    #[error("{0}")]
    Place(#[from] PlaceError),

    #[error("{0}")]
    Facility(#[from] FacilityError),
}

/// Lifecycle of one query result.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Nothing fetched yet.
    Idle,

    /// A workflow is in flight.
    Loading,

    /// Fetch succeeded with at least one non-operational facility group.
    Success {
        label: String,
        groups: Vec<FacilityGroup>,
    },

    /// Fetch succeeded but there is nothing to list. `all_working`
    /// distinguishes "every facility operational" from "no matching
    /// facilities found".
    Empty { label: String, all_working: bool },

    /// Fetch failed; `message` is already user-facing.
    Error { message: String },
}

/// What kind of user action started a workflow. Controls error wording
/// and whether the location label resets on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Search,
    Location,
}

#[derive(Debug)]
struct Inner {
    state: FetchState,
    location_label: String,
    error_event: Option<Event<String>>,
    inquiry_event: Option<Event<()>>,
}

/// State holder driving the facility lookup pipeline.
///
/// Collaborators are injected explicitly; there is no process-wide
/// singleton behind this type.
pub struct StationViewModel<G, P, F> {
    geolocator: G,
    places: P,
    facilities: F,
    inner: Mutex<Inner>,
}

impl<G, P, F> StationViewModel<G, P, F>
where
    G: Geolocator,
    P: PlaceResolver,
    F: FacilitySource,
{
    /// Create a state holder over the given collaborators.
    pub fn new(geolocator: G, places: P, facilities: F) -> Self {
        Self {
            geolocator,
            places,
            facilities,
            inner: Mutex::new(Inner {
                state: FetchState::Idle,
                location_label: LABEL_CURRENT_LOCATION.to_string(),
                error_event: None,
                inquiry_event: None,
            }),
        }
    }

    /// Search facilities by station name typed by the user.
    ///
    /// Blank input emits a one-shot validation error and leaves the state
    /// untouched; the facility source is never called.
    pub async fn search(&self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.lock().error_event = Some(Event::new(MSG_INPUT_STATION_NAME.to_string()));
            return;
        }

        self.lock().state = FetchState::Loading;

        let name = StationName::new(trimmed);
        let result = self.fetch_summary(&name).await;
        self.apply(result, Trigger::Search);
    }

    /// Locate the device and report the nearest station's facilities.
    pub async fn locate(&self) {
        self.lock().state = FetchState::Loading;

        let result = self.locate_and_fetch().await;
        self.apply(result, Trigger::Location);
    }

    /// Ask the UI to open the inquiry email composer.
    pub fn on_inquiry(&self) {
        self.lock().inquiry_event = Some(Event::new(()));
    }

    /// Current fetch state.
    pub fn state(&self) -> FetchState {
        self.lock().state.clone()
    }

    /// Whether a workflow is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.lock().state, FetchState::Loading)
    }

    /// Current station label.
    pub fn location_label(&self) -> String {
        self.lock().location_label.clone()
    }

    /// Consume the pending error event, if any and not yet handled.
    pub fn take_error(&self) -> Option<String> {
        let inner = self.lock();
        inner.error_event.as_ref().and_then(|e| e.take()).cloned()
    }

    /// Consume the pending inquiry event.
    pub fn take_inquiry(&self) -> bool {
        let inner = self.lock();
        inner
            .inquiry_event
            .as_ref()
            .and_then(|e| e.take())
            .is_some()
    }

    async fn locate_and_fetch(&self) -> Result<StationSummary, FetchError> {
        let coords = tokio::time::timeout(LOCATION_TIMEOUT, self.geolocator.current_location())
            .await
            .map_err(|_| LocationError::TimedOut)??;
        debug!(lat = coords.latitude(), lon = coords.longitude(), "device position");

        let station = self.places.resolve_nearest_station(coords).await?;
        self.fetch_summary(&station).await
    }

    async fn fetch_summary(&self, name: &StationName) -> Result<StationSummary, FetchError> {
        let search = self.facilities.search_by_station_name(name).await?;
        if search.failed_ranges > 0 {
            warn!(failed = search.failed_ranges, "serving partial facility data");
        }
        Ok(summarize(&search.rows))
    }

    fn apply(&self, result: Result<StationSummary, FetchError>, trigger: Trigger) {
        match result {
            Ok(summary) => {
                let mut inner = self.lock();
                inner.location_label = summary.label.clone();
                inner.state = if summary.groups.is_empty() {
                    FetchState::Empty {
                        label: summary.label,
                        all_working: summary.all_working,
                    }
                } else {
                    FetchState::Success {
                        label: summary.label,
                        groups: summary.groups,
                    }
                };
            }
            Err(e) => {
                let prefix = match trigger {
                    Trigger::Search => SEARCH_FAILURE_PREFIX,
                    Trigger::Location => LOCATION_FAILURE_PREFIX,
                };
                let message = format!("{prefix}{e}");

                let mut inner = self.lock();
                if trigger == Trigger::Location {
                    inner.location_label = LABEL_LOCATION_UNKNOWN.to_string();
                }
                inner.state = FetchState::Error {
                    message: message.clone(),
                };
                inner.error_event = Some(Event::new(message));
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Lock is only held for field reads/writes, never across await.
        self.inner.lock().expect("state lock poisoned")
    }
}
