use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wellness_signal_core::frames::{self, ClipStats, FRAME_SIZE, FrameStats};

fn approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
}

#[test]
fn frame_count_rounds_up_and_keeps_tail() {
    let samples = vec![0.1_f32; 2 * FRAME_SIZE + 452];
    let stats = frames::frame_stats(&samples);
    assert_eq!(stats.len(), 3);

    let exact = vec![0.1_f32; 2 * FRAME_SIZE];
    assert_eq!(frames::frame_stats(&exact).len(), 2);

    let single = vec![0.1_f32; 1];
    assert_eq!(frames::frame_stats(&single).len(), 1);
}

#[test]
fn constant_signal_has_rms_of_its_level_and_no_crossings() {
    let stats = frames::analyze_frame(&[0.5; FRAME_SIZE]);
    approx_eq(stats.rms, 0.5);
    assert_eq!(stats.zcr, 0.0);
}

#[test]
fn alternating_signal_crosses_every_pair() {
    let frame: Vec<f32> = (0..FRAME_SIZE)
        .map(|i| if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();
    let stats = frames::analyze_frame(&frame);
    approx_eq(stats.zcr, (FRAME_SIZE - 1) as f32 / FRAME_SIZE as f32);
    approx_eq(stats.rms, 0.1);
}

#[test]
fn short_tail_is_not_padded_and_weighs_like_a_full_frame() {
    let mut samples = vec![1.0_f32; FRAME_SIZE];
    samples.extend_from_slice(&[0.5; 4]);

    let stats = frames::frame_stats(&samples);
    assert_eq!(stats.len(), 2);
    approx_eq(stats[1].rms, 0.5);

    let clip = frames::aggregate(&stats);
    approx_eq(clip.rms, 0.75);
}

#[test]
fn crossings_are_counted_within_frames_only() {
    // The sign flips exactly at the frame boundary.
    let mut samples = vec![0.2_f32; FRAME_SIZE];
    samples.extend(vec![-0.2_f32; FRAME_SIZE]);
    let stats = frames::frame_stats(&samples);
    assert!(stats.iter().all(|f| f.zcr == 0.0));
}

#[test]
fn empty_input_aggregates_to_zero() {
    assert!(frames::frame_stats(&[]).is_empty());
    assert_eq!(frames::aggregate(&[]), ClipStats { rms: 0.0, zcr: 0.0 });
    assert_eq!(frames::clip_stats(&[]), ClipStats::default());
}

#[test]
fn aggregate_is_unweighted_mean() {
    let stats = [
        FrameStats { rms: 0.2, zcr: 0.1 },
        FrameStats { rms: 0.4, zcr: 0.3 },
    ];
    let clip = frames::aggregate(&stats);
    approx_eq(clip.rms, 0.3);
    approx_eq(clip.zcr, 0.2);
}

#[test]
fn random_buffers_stay_in_range_and_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(0..5_000);
        let samples: Vec<f32> = (0..len).map(|_| rng.gen_range(-1.0_f32..1.0)).collect();

        let first = frames::clip_stats(&samples);
        assert!(!first.rms.is_nan() && !first.zcr.is_nan());
        assert!((0.0..=1.0).contains(&first.rms), "rms out of range: {}", first.rms);
        assert!((0.0..=1.0).contains(&first.zcr), "zcr out of range: {}", first.zcr);

        let second = frames::clip_stats(&samples);
        assert_eq!(first.rms.to_bits(), second.rms.to_bits());
        assert_eq!(first.zcr.to_bits(), second.zcr.to_bits());
    }
}
