#![no_main]

use bezier_spline_tools::{BezierNode, BezierSpline};
use glam::Vec3;
use libfuzzer_sys::fuzz_target;

/// Schrittlimit klein halten, damit degenerierte Schrittweiten schnell enden.
const MAX_STEPS: usize = 2_000;

fn read_f32(chunk: &[u8]) -> f32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(chunk);
    f32::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let floats: Vec<f32> = data.chunks_exact(4).map(read_f32).collect();
    let Some((params, coords)) = floats.split_first_chunk::<3>() else {
        return;
    };
    let [t, scan_step, distance] = *params;

    let nodes: Vec<BezierNode> = coords
        .chunks_exact(9)
        .take(64)
        .map(|c| {
            BezierNode::new(
                Vec3::new(c[0], c[1], c[2]),
                Vec3::new(c[3], c[4], c[5]),
                Vec3::new(c[6], c[7], c[8]),
            )
        })
        .collect();
    let spline = BezierSpline::with_nodes(nodes);

    let Ok(curve) = spline.curve() else {
        assert!(spline.evaluate(t).is_err());
        return;
    };

    let _ = curve.global_to_local(t);
    let _ = curve.evaluate(t);
    let _ = curve.total_length(scan_step, MAX_STEPS);
    let _ = curve.distance_between(t, distance, scan_step, MAX_STEPS);

    // Folge muss endlich sein und mit 1 enden
    let samples: Vec<f32> = curve
        .sample_by_distance(distance, scan_step, MAX_STEPS)
        .take(MAX_STEPS + 2)
        .collect();
    assert_eq!(samples.last().copied(), Some(1.0));
});
