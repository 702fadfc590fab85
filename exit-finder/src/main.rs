use exit_finder::cache::{CacheConfig, CachedFacilityClient};
use exit_finder::domain::Coordinates;
use exit_finder::facilities::{FacilityClient, FacilityClientConfig};
use exit_finder::location::FixedGeolocator;
use exit_finder::places::{PlaceClient, PlaceClientConfig};
use exit_finder::state::{FetchState, StationViewModel};

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  exit-finder <station name>       search by station name");
    eprintln!("  exit-finder --locate <lat> <lon> search around a position");
    std::process::exit(2);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let seoul_key = std::env::var("SEOUL_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: SEOUL_API_KEY not set. Facility API calls will fail.");
        String::new()
    });
    let kakao_key = std::env::var("KAKAO_REST_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: KAKAO_REST_API_KEY not set. Place search calls will fail.");
        String::new()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();

    // The device GPS is out of scope for the binary; --locate takes an
    // explicit position and feeds it through the same pipeline.
    let (locate, position, station_query) = match args.first().map(String::as_str) {
        Some("--locate") => {
            let (Some(lat), Some(lon)) = (args.get(1), args.get(2)) else {
                usage();
            };
            let (Ok(lat), Ok(lon)) = (lat.parse::<f64>(), lon.parse::<f64>()) else {
                usage();
            };
            let position = Coordinates::new(lat, lon).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });
            (true, position, String::new())
        }
        Some(_) => {
            // Default position is unused for name searches.
            let position = Coordinates::new(37.5663, 126.9779).expect("valid default position");
            (false, position, args.join(" "))
        }
        None => usage(),
    };

    let places = PlaceClient::new(PlaceClientConfig::new(&kakao_key))
        .expect("Failed to create place client");

    let facility_client = FacilityClient::new(FacilityClientConfig::new(&seoul_key))
        .expect("Failed to create facility client");
    let facilities = CachedFacilityClient::new(facility_client, &CacheConfig::default());

    let vm = StationViewModel::new(FixedGeolocator::new(position), places, facilities);

    if locate {
        vm.locate().await;
    } else {
        vm.search(&station_query).await;
    }

    match vm.state() {
        FetchState::Success { label, groups } => {
            println!("{label}");
            for group in groups {
                println!("  {} | {} | {}", group.kind, group.location, group.status);
            }
        }
        FetchState::Empty { label, all_working } => {
            println!("{label}");
            if all_working {
                println!("  모든 승강기 사용 가능");
            }
        }
        FetchState::Error { .. } => {
            if let Some(message) = vm.take_error() {
                eprintln!("{message}");
            }
            std::process::exit(1);
        }
        FetchState::Idle | FetchState::Loading => {
            if let Some(message) = vm.take_error() {
                eprintln!("{message}");
            }
            std::process::exit(1);
        }
    }
}
