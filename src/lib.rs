//! Hand-gesture recognition: landmark datasets, random-forest classifiers,
//! and the HTTP service that serves their predictions.
//!
//! ## Modules
//!
//! - [`dataset`] — CSV ingestion, train/test splitting, motion windowing
//! - [`forest`] — CART random forest and its on-disk artifact
//! - [`gesture`] — classifier selection and request-time dispatch
//! - [`dto`] — JSON wire types for `/predict`
//! - [`metrics`] — accuracy, classification report, confusion matrix
//! - [`training`] — offline jobs that produce the three artifacts
//! - [`server`] — actix-web routes and pages
pub mod dataset;
pub mod dto;
pub mod forest;
pub mod gesture;
#[cfg(feature = "server")]
pub mod metrics;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod training;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Landmark coordinates and derived feature values.
pub type Feature = f32;
/// Class probabilities, leaf distributions, and confidences.
pub type Probability = f32;

// ============================================================================
// LANDMARK GEOMETRY
// One hand is 21 tracked points, sent as all x values followed by all y values.
// ============================================================================
/// Tracked points per detected hand.
pub const LANDMARKS_PER_HAND: usize = 21;
/// Coordinate dimensions per landmark (x, y).
pub const COORDINATES: usize = 2;
/// Feature vector length for a single hand in a single frame.
pub const FEATURES_PER_HAND: usize = LANDMARKS_PER_HAND * COORDINATES;
/// Consecutive frames that make up one motion sample.
pub const MOTION_WINDOW: usize = 30;
/// Flattened feature vector length of one motion window.
pub const MOTION_FEATURES: usize = MOTION_WINDOW * FEATURES_PER_HAND;

// ============================================================================
// TRAINING CONFIGURATION
// ============================================================================
/// Share of samples held out for evaluation.
pub const TEST_FRACTION: f64 = 0.2;
/// Seed shared by splitting and forest fitting for reproducible artifacts.
pub const TRAINING_SEED: u64 = 42;
/// Trees in the one-hand static forest.
pub const TREES_STATIC_1HAND: usize = 200;
/// Trees in the two-hand static forest.
pub const TREES_STATIC_2HAND: usize = 300;
/// Trees in the one-hand motion forest.
pub const TREES_MOTION_1HAND: usize = 200;

// ============================================================================
// FILES
// ============================================================================
/// Training data for the one-hand static forest.
pub const DATASET_STATIC_1HAND: &str = "dataset4.csv";
/// Training data for the two-hand static forest.
pub const DATASET_STATIC_2HAND: &str = "twohands_static.csv";
/// Per-frame training data for the one-hand motion forest.
pub const DATASET_MOTION_1HAND: &str = "onehandmotion.csv";
/// Artifact produced for the one-hand static forest.
pub const ARTIFACT_STATIC_1HAND: &str = "model.forest";
/// Artifact produced for the two-hand static forest.
pub const ARTIFACT_STATIC_2HAND: &str = "static_2hand_rf.forest";
/// Artifact produced for the one-hand motion forest.
pub const ARTIFACT_MOTION_1HAND: &str = "motion_1hand.forest";

// ============================================================================
// SERVICE
// ============================================================================
/// Listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 10000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Terminal logging at INFO plus a per-run DEBUG file at
/// `logs/handsign-{unix seconds}.log`. Connection chatter from the actix
/// runtime stays out of the terminal; request lines from the access log remain.
#[cfg(feature = "server")]
pub fn log() {
    let dir = std::path::Path::new("logs");
    std::fs::create_dir_all(dir).expect("create logs directory");
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::File::create(dir.join(format!("handsign-{}.log", started)))
        .expect("create log file");
    let quiet = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_ignore_str("actix_server")
        .build();
    let verbose = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Debug)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            quiet,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, verbose, file),
    ])
    .expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Must be called from within a tokio runtime.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
