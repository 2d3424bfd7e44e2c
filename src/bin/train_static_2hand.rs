//! Two-Hand Static Trainer Binary
//!
//! Fits twohands_static.csv into static_2hand_rf.forest (300 trees),
//! printing a classification report and confusion heatmap.
//!
//! Options: --csv, --out

use clap::Parser;
use handsign::gesture::Gesture;
use handsign::training::Args;
use handsign::training::Trainer;
use handsign::*;

fn main() {
    log();
    if let Err(e) = Trainer::new(Gesture::TwoHandStatic, Args::parse()).run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
