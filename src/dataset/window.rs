use super::Frame;
use super::Samples;
use std::collections::BTreeMap;

/// Aggregates recorded frames into fixed-size motion samples.
///
/// Frames are grouped by label and restored to temporal order by frame index
/// (stable, so duplicate indices keep their recorded order). Each group is cut
/// into consecutive, non-overlapping windows of exactly `size` frames, and each
/// window is flattened frame-major into one feature row. A trailing remainder
/// shorter than `size` is dropped, never padded, so a label with `F` frames
/// yields `F / size` samples. Labels are emitted in sorted order.
pub fn windows(frames: Vec<Frame>, size: usize) -> Samples {
    assert!(size > 0, "window size must be positive");
    frames
        .into_iter()
        .fold(BTreeMap::<String, Vec<Frame>>::new(), |mut groups, frame| {
            groups.entry(frame.label.clone()).or_default().push(frame);
            groups
        })
        .into_iter()
        .flat_map(|(label, mut group)| {
            group.sort_by_key(|frame| frame.index);
            group
                .chunks_exact(size)
                .map(|chunk| {
                    let row = chunk
                        .iter()
                        .flat_map(|frame| frame.features.iter().copied())
                        .collect::<Vec<_>>();
                    (label.clone(), row)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
