//! Scalar-vs-vector parity harness: every operator has a scalar reference
//! implementation used as a correctness oracle for its vector counterpart.
//! Runs every operator, in both precisions, over a handful
//! of representative premultiplied pixel pairs, and checks that a full
//! lane group of that pair produces results matching the scalar kernel in
//! every lane, including a short tail lane group.

use raster_compositor::kernel::{scalar, vector};
use raster_compositor::operator::Operator;
use raster_math::LANES;

const U16_CASES: &[(scalar::RgbaU16, scalar::RgbaU16)] = &[
    ([176, 59, 54, 255], [143, 128, 227, 255]),
    ([0, 0, 0, 0], [200, 100, 50, 255]),
    ([255, 255, 255, 255], [0, 0, 0, 0]),
    ([158, 53, 48, 230], [114, 102, 181, 204]),
    ([10, 250, 128, 128], [250, 10, 64, 64]),
];

const F32_CASES: &[(scalar::RgbaF32, scalar::RgbaF32)] = &[
    ([0.69, 0.23, 0.21, 1.0], [0.56, 0.50, 0.89, 1.0]),
    ([0.0, 0.0, 0.0, 0.0], [0.78, 0.39, 0.20, 1.0]),
    ([1.0, 1.0, 1.0, 1.0], [0.0, 0.0, 0.0, 0.0]),
    ([0.62, 0.21, 0.19, 0.9], [0.45, 0.40, 0.70, 0.8]),
    ([0.04, 0.98, 0.50, 0.5], [0.98, 0.04, 0.25, 0.25]),
];

fn broadcast_u16(pixel: scalar::RgbaU16, lanes: usize) -> vector::RgbaLaneU16 {
    let mut out = [[0u16; LANES]; 4];
    for lane in 0..lanes {
        for ch in 0..4 {
            out[ch][lane] = pixel[ch];
        }
    }
    out
}

fn broadcast_f32(pixel: scalar::RgbaF32, lanes: usize) -> vector::RgbaLaneF32 {
    let mut out = [[0.0f32; LANES]; 4];
    for lane in 0..lanes {
        for ch in 0..4 {
            out[ch][lane] = pixel[ch];
        }
    }
    out
}

#[test]
fn vector_u16_matches_scalar_for_every_operator_full_lane_group() {
    for op in Operator::ALL {
        for &(dst, src) in U16_CASES {
            let scalar_result = scalar::apply_u16(op, dst, src);
            let lane_dst = broadcast_u16(dst, LANES);
            let lane_src = broadcast_u16(src, LANES);
            let lane_result = vector::apply_u16(op, lane_dst, lane_src);
            for lane in 0..LANES {
                let got = [lane_result[0][lane], lane_result[1][lane], lane_result[2][lane], lane_result[3][lane]];
                assert_eq!(got, scalar_result, "operator {op:?} lane {lane} mismatch (integer)");
            }
        }
    }
}

#[test]
fn vector_u16_matches_scalar_for_a_tail_lane_group() {
    let tail = (LANES - 1).max(1);
    for op in Operator::ALL {
        let (dst, src) = U16_CASES[0];
        let scalar_result = scalar::apply_u16(op, dst, src);
        let lane_dst = broadcast_u16(dst, tail);
        let lane_src = broadcast_u16(src, tail);
        let lane_result = vector::apply_u16(op, lane_dst, lane_src);
        for lane in 0..tail {
            let got = [lane_result[0][lane], lane_result[1][lane], lane_result[2][lane], lane_result[3][lane]];
            assert_eq!(got, scalar_result, "operator {op:?} tail lane {lane} mismatch (integer)");
        }
    }
}

#[test]
fn vector_f32_matches_scalar_for_every_operator_full_lane_group() {
    const EPS: f32 = 1e-5;
    for op in Operator::ALL {
        for &(dst, src) in F32_CASES {
            let scalar_result = scalar::apply_f32(op, dst, src);
            let lane_dst = broadcast_f32(dst, LANES);
            let lane_src = broadcast_f32(src, LANES);
            let lane_result = vector::apply_f32(op, lane_dst, lane_src);
            for lane in 0..LANES {
                for ch in 0..4 {
                    let got = lane_result[ch][lane];
                    let want = scalar_result[ch];
                    assert!(
                        (got - want).abs() < EPS,
                        "operator {op:?} lane {lane} channel {ch} mismatch (float): {got} vs {want}"
                    );
                }
            }
        }
    }
}

#[test]
fn every_operator_requiring_float_is_blanked_in_integer_precision_both_kernels() {
    for op in Operator::ALL.iter().filter(|op| op.requires_float()) {
        let scalar_result = scalar::apply_u16(*op, [100, 100, 100, 255], [50, 50, 50, 255]);
        assert_eq!(scalar_result, [0, 0, 0, 0]);

        let lane_result = vector::apply_u16(
            *op,
            broadcast_u16([100, 100, 100, 255], LANES),
            broadcast_u16([50, 50, 50, 255], LANES),
        );
        for lane in 0..LANES {
            let got = [lane_result[0][lane], lane_result[1][lane], lane_result[2][lane], lane_result[3][lane]];
            assert_eq!(got, [0, 0, 0, 0]);
        }
    }
}
