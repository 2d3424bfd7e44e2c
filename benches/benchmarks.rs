criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        fitting_static_forest,
        predicting_static_pose,
        predicting_motion_window,
        dispatching_static_request,
        windowing_motion_frames,
        writing_forest_artifact,
        reading_forest_artifact,
}

fn fitting_static_forest(c: &mut criterion::Criterion) {
    let samples = poses(200, FEATURES_PER_HAND);
    c.bench_function("fit a 20-tree forest on 200 poses", |b| {
        b.iter(|| Forest::fit(&samples, Params::new(20, TRAINING_SEED)))
    });
}

fn predicting_static_pose(c: &mut criterion::Criterion) {
    let forest = forest(FEATURES_PER_HAND, TREES_STATIC_1HAND);
    let row = vec![0.5; FEATURES_PER_HAND];
    c.bench_function("predict a 1-hand static pose", |b| {
        b.iter(|| forest.predict_proba(&row))
    });
}

fn predicting_motion_window(c: &mut criterion::Criterion) {
    let forest = forest(MOTION_FEATURES, TREES_MOTION_1HAND);
    let row = vec![0.5; MOTION_FEATURES];
    c.bench_function("predict a 30-frame motion window", |b| {
        b.iter(|| forest.predict_proba(&row))
    });
}

fn dispatching_static_request(c: &mut criterion::Criterion) {
    let models = Models::new(
        forest(FEATURES_PER_HAND, 50),
        forest(2 * FEATURES_PER_HAND, 50),
        forest(MOTION_FEATURES, 50),
    );
    let landmarks = vec![0.5f64; 2 * FEATURES_PER_HAND];
    c.bench_function("dispatch a 2-hand static request", |b| {
        b.iter(|| models.dispatch(Some(landmarks.as_slice()), 2, false))
    });
}

fn windowing_motion_frames(c: &mut criterion::Criterion) {
    let frames = (0..3000)
        .map(|i| Frame {
            label: ["hello", "thanks", "please"][i % 3].to_string(),
            index: (i / 3) as i64,
            features: vec![i as f32; FEATURES_PER_HAND],
        })
        .collect::<Vec<_>>();
    c.bench_function("window 3000 recorded frames", |b| {
        b.iter(|| windows(frames.clone(), MOTION_WINDOW))
    });
}

fn writing_forest_artifact(c: &mut criterion::Criterion) {
    let forest = forest(FEATURES_PER_HAND, TREES_STATIC_1HAND);
    c.bench_function("serialize a 1-hand static forest", |b| {
        b.iter(|| {
            let mut bytes = Vec::new();
            forest.write(&mut bytes).map(|_| bytes.len())
        })
    });
}

fn reading_forest_artifact(c: &mut criterion::Criterion) {
    let mut bytes = Vec::new();
    let _ = forest(FEATURES_PER_HAND, TREES_STATIC_1HAND).write(&mut bytes);
    c.bench_function("deserialize a 1-hand static forest", |b| {
        b.iter(|| Forest::read(&mut bytes.as_slice()))
    });
}

/// Noisy poses drawn around one center per label.
fn poses(n: usize, width: usize) -> Samples {
    let ref mut rng = SmallRng::seed_from_u64(TRAINING_SEED);
    (0..n)
        .map(|i| {
            let class = i % 4;
            let row = (0..width)
                .map(|_| class as f32 * 0.25 + rng.random_range(-0.2..0.2))
                .collect::<Vec<_>>();
            (format!("sign-{}", class), row)
        })
        .collect()
}

fn forest(width: usize, trees: usize) -> Forest {
    Forest::fit(&poses(100, width), Params::new(trees, TRAINING_SEED)).expect("fit bench forest")
}

use handsign::FEATURES_PER_HAND;
use handsign::MOTION_FEATURES;
use handsign::MOTION_WINDOW;
use handsign::TRAINING_SEED;
use handsign::TREES_MOTION_1HAND;
use handsign::TREES_STATIC_1HAND;
use handsign::dataset::Frame;
use handsign::dataset::Samples;
use handsign::dataset::windows;
use handsign::forest::Forest;
use handsign::forest::Params;
use handsign::gesture::Models;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
