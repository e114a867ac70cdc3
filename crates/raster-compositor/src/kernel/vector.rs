//! Lane-group (SIMD) kernels. Each separable operator is vectorized
//! directly over `raster_math::simd` primitives; the 4 non-separable
//! kernels fall back to a per-lane scalar loop, since only the separable
//! formulas get lane-wise treatment and `Lum`/`Sat`/`SetSat` have no
//! natural lane-wise form (per-lane channel sort).
//!
//! Every function here has a scalar counterpart in [`crate::kernel::scalar`]
//! it must agree with bit-for-bit (integer) or within tolerance (float),
//! exercised by the `test_matches_scalar_*` tests below.

use raster_math::simd::{
    self, LaneF32, LaneU16,
};

use crate::kernel::nonseparable;
use crate::kernel::scalar;
use crate::operator::Operator;

/// A lane group of premultiplied RGBA pixels, integer precision: one
/// `LaneU16` per channel.
pub type RgbaLaneU16 = [LaneU16; 4];
/// A lane group of premultiplied RGBA pixels, float precision.
pub type RgbaLaneF32 = [LaneF32; 4];

const ONES_F32: LaneF32 = [1.0; simd::LANES];

#[inline]
fn lt_u16(a: LaneU16, b: LaneU16) -> [bool; simd::LANES] {
    std::array::from_fn(|i| a[i] < b[i])
}

#[inline]
fn le_f32(a: LaneF32, b: LaneF32) -> [bool; simd::LANES] {
    std::array::from_fn(|i| a[i] <= b[i])
}

/// Evaluates `op` over a lane group in integer precision. Float-only
/// operators yield a transparent-black lane group.
pub fn apply_u16(op: Operator, dst: RgbaLaneU16, src: RgbaLaneU16) -> RgbaLaneU16 {
    if op.requires_float() {
        return [[0; simd::LANES]; 4];
    }
    let [dr, dg, db, da] = dst;
    let [sr, sg, sb, sa] = src;
    let r = channel_u16(op, dr, sr, da, sa);
    let g = channel_u16(op, dg, sg, da, sa);
    let b = channel_u16(op, db, sb, da, sa);
    let a = alpha_u16(op, da, sa);
    [r, g, b, a]
}

/// Evaluates `op` over a lane group in float precision.
pub fn apply_f32(op: Operator, dst: RgbaLaneF32, src: RgbaLaneF32) -> RgbaLaneF32 {
    match op {
        Operator::Hue | Operator::Saturation | Operator::Color | Operator::Luminosity => {
            apply_nonseparable_lanes(op, dst, src)
        }
        _ => {
            let [dr, dg, db, da] = dst;
            let [sr, sg, sb, sa] = src;
            let r = channel_f32(op, dr, sr, da, sa);
            let g = channel_f32(op, dg, sg, da, sa);
            let b = channel_f32(op, db, sb, da, sa);
            let a = alpha_f32(op, da, sa);
            [r, g, b, a]
        }
    }
}

fn apply_nonseparable_lanes(op: Operator, dst: RgbaLaneF32, src: RgbaLaneF32) -> RgbaLaneF32 {
    let mut out = [[0.0f32; simd::LANES]; 4];
    for lane in 0..simd::LANES {
        let d = [dst[0][lane], dst[1][lane], dst[2][lane], dst[3][lane]];
        let s = [src[0][lane], src[1][lane], src[2][lane], src[3][lane]];
        let r = nonseparable::apply(op, d, s);
        for ch in 0..4 {
            out[ch][lane] = r[ch];
        }
    }
    out
}

fn alpha_u16(op: Operator, da: LaneU16, sa: LaneU16) -> LaneU16 {
    match op {
        Operator::Clear => [0; simd::LANES],
        Operator::Src => sa,
        Operator::Dst => da,
        Operator::SrcAtop => da,
        Operator::DstAtop => sa,
        Operator::Xor => {
            let sada2 = simd::mul_div_255_u16(sa, da);
            std::array::from_fn(|i| sa[i] + da[i] - 2 * sada2[i])
        }
        Operator::Plus => simd::add_sat_u16(sa, da, 255),
        _ => {
            let sada = simd::mul_div_255_u16(sa, da);
            std::array::from_fn(|i| sa[i] + da[i] - sada[i])
        }
    }
}

fn alpha_f32(op: Operator, da: LaneF32, sa: LaneF32) -> LaneF32 {
    match op {
        Operator::Clear => [0.0; simd::LANES],
        Operator::Src => sa,
        Operator::Dst => da,
        Operator::SrcAtop => da,
        Operator::DstAtop => sa,
        Operator::Xor => {
            let sada2 = simd::mul_f32(sa, da);
            std::array::from_fn(|i| sa[i] + da[i] - 2.0 * sada2[i])
        }
        Operator::Plus => {
            let sum: LaneF32 = std::array::from_fn(|i| sa[i] + da[i]);
            simd::min_f32(sum, ONES_F32)
        }
        _ => {
            let sada = simd::mul_f32(sa, da);
            std::array::from_fn(|i| sa[i] + da[i] - sada[i])
        }
    }
}

fn channel_u16(op: Operator, dc: LaneU16, sc: LaneU16, da: LaneU16, sa: LaneU16) -> LaneU16 {
    let inv_da = simd::inv_u16(da);
    let inv_sa = simd::inv_u16(sa);
    match op {
        Operator::Clear => [0; simd::LANES],
        Operator::Src => sc,
        Operator::Dst => dc,
        Operator::SrcOver => {
            let t = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| sc[i] + t[i])
        }
        Operator::DstOver => {
            let t = simd::mul_div_255_u16(sc, inv_da);
            std::array::from_fn(|i| dc[i] + t[i])
        }
        Operator::SrcIn => simd::mul_div_255_u16(sc, da),
        Operator::DstIn => simd::mul_div_255_u16(dc, sa),
        Operator::SrcOut => simd::mul_div_255_u16(sc, inv_da),
        Operator::DstOut => simd::mul_div_255_u16(dc, inv_sa),
        Operator::SrcAtop => {
            let a = simd::mul_div_255_u16(sc, da);
            let b = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::DstAtop => {
            let a = simd::mul_div_255_u16(dc, sa);
            let b = simd::mul_div_255_u16(sc, inv_da);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::Xor => {
            let a = simd::mul_div_255_u16(sc, inv_da);
            let b = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::Plus => simd::add_sat_u16(sc, dc, 255),
        Operator::Multiply => {
            let a = simd::mul_div_255_u16(sc, dc);
            let b = simd::mul_div_255_u16(sc, inv_da);
            let c = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i] + c[i])
        }
        Operator::Screen => {
            let m = simd::mul_div_255_u16(sc, dc);
            std::array::from_fn(|i| sc[i] + dc[i] - m[i])
        }
        Operator::Darken => {
            let sada = simd::mul_div_255_u16(sc, da);
            let dasa = simd::mul_div_255_u16(dc, sa);
            let m = simd::min_u16(sada, dasa);
            let b = simd::mul_div_255_u16(sc, inv_da);
            let c = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| m[i] + b[i] + c[i])
        }
        Operator::Lighten => {
            let sada = simd::mul_div_255_u16(sc, da);
            let dasa = simd::mul_div_255_u16(dc, sa);
            let m = simd::max_u16(sada, dasa);
            let b = simd::mul_div_255_u16(sc, inv_da);
            let c = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| m[i] + b[i] + c[i])
        }
        Operator::Difference => {
            let sada = simd::mul_div_255_u16(sc, da);
            let dasa = simd::mul_div_255_u16(dc, sa);
            let m = simd::min_u16(sada, dasa);
            std::array::from_fn(|i| (sc[i] as i32 + dc[i] as i32 - 2 * m[i] as i32).max(0) as u16)
        }
        Operator::Exclusion => {
            let sada = simd::mul_div_255_u16(sc, da);
            let dasa = simd::mul_div_255_u16(dc, sa);
            let scdc = simd::mul_div_255_u16(sc, dc);
            let b = simd::mul_div_255_u16(sc, inv_da);
            let c = simd::mul_div_255_u16(dc, inv_sa);
            std::array::from_fn(|i| {
                (sada[i] as i32 + dasa[i] as i32 - 2 * scdc[i] as i32 + b[i] as i32 + c[i] as i32).clamp(0, 255) as u16
            })
        }
        Operator::Overlay => {
            let two_dc: LaneU16 = std::array::from_fn(|i| dc[i].saturating_mul(2));
            let cond = lt_u16(two_dc, {
                let d1: LaneU16 = std::array::from_fn(|i| da[i] + 1);
                d1
            });
            let lo = {
                let scdc = simd::mul_div_255_u16(sc, dc);
                let b = simd::mul_div_255_u16(sc, inv_da);
                let c = simd::mul_div_255_u16(dc, inv_sa);
                let two: LaneU16 = std::array::from_fn(|i| scdc[i].saturating_mul(2));
                std::array::from_fn(|i| two[i] + b[i] + c[i])
            };
            let hi = {
                let sada = simd::mul_div_255_u16(sc, da);
                let dasa = simd::mul_div_255_u16(dc, sa);
                let dcsc = simd::mul_div_255_u16(dc, sc);
                let dasa2 = simd::mul_div_255_u16(da, sa);
                std::array::from_fn(|i| {
                    (sc[i] as i32 + sada[i] as i32 + dc[i] as i32 + dasa[i] as i32
                        - 2 * dcsc[i] as i32
                        - dasa2[i] as i32)
                        .clamp(0, 255) as u16
                })
            };
            simd::select_u16(cond, lo, hi)
        }
        Operator::HardLight => {
            let two_sc: LaneU16 = std::array::from_fn(|i| sc[i].saturating_mul(2));
            let cond = lt_u16(two_sc, {
                let a1: LaneU16 = std::array::from_fn(|i| sa[i] + 1);
                a1
            });
            let lo = {
                let scdc = simd::mul_div_255_u16(sc, dc);
                let b = simd::mul_div_255_u16(sc, inv_da);
                let c = simd::mul_div_255_u16(dc, inv_sa);
                let two: LaneU16 = std::array::from_fn(|i| scdc[i].saturating_mul(2));
                std::array::from_fn(|i| two[i] + b[i] + c[i])
            };
            let hi = {
                let sada = simd::mul_div_255_u16(sc, da);
                let dasa = simd::mul_div_255_u16(dc, sa);
                let sadaa = simd::mul_div_255_u16(sa, da);
                let scdc = simd::mul_div_255_u16(sc, dc);
                std::array::from_fn(|i| {
                    (sc[i] as i32 + sada[i] as i32 + dc[i] as i32 + dasa[i] as i32
                        - sadaa[i] as i32
                        - 2 * scdc[i] as i32)
                        .clamp(0, 255) as u16
                })
            };
            simd::select_u16(cond, lo, hi)
        }
        Operator::ColorDodge | Operator::ColorBurn | Operator::SoftLight => unreachable!(),
        Operator::Hue | Operator::Saturation | Operator::Color | Operator::Luminosity => unreachable!(),
    }
}

fn channel_f32(op: Operator, dc: LaneF32, sc: LaneF32, da: LaneF32, sa: LaneF32) -> LaneF32 {
    let inv_da = simd::inv_f32(da);
    let inv_sa = simd::inv_f32(sa);
    match op {
        Operator::Clear => [0.0; simd::LANES],
        Operator::Src => sc,
        Operator::Dst => dc,
        Operator::SrcOver => {
            let t = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| sc[i] + t[i])
        }
        Operator::DstOver => {
            let t = simd::mul_f32(sc, inv_da);
            std::array::from_fn(|i| dc[i] + t[i])
        }
        Operator::SrcIn => simd::mul_f32(sc, da),
        Operator::DstIn => simd::mul_f32(dc, sa),
        Operator::SrcOut => simd::mul_f32(sc, inv_da),
        Operator::DstOut => simd::mul_f32(dc, inv_sa),
        Operator::SrcAtop => {
            let a = simd::mul_f32(sc, da);
            let b = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::DstAtop => {
            let a = simd::mul_f32(dc, sa);
            let b = simd::mul_f32(sc, inv_da);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::Xor => {
            let a = simd::mul_f32(sc, inv_da);
            let b = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i])
        }
        Operator::Plus => {
            let sum: LaneF32 = std::array::from_fn(|i| sc[i] + dc[i]);
            simd::min_f32(sum, ONES_F32)
        }
        Operator::Multiply => {
            let a = simd::mul_f32(sc, dc);
            let b = simd::mul_f32(sc, inv_da);
            let c = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| a[i] + b[i] + c[i])
        }
        Operator::Screen => {
            let m = simd::mul_f32(sc, dc);
            std::array::from_fn(|i| sc[i] + dc[i] - m[i])
        }
        Operator::Darken => {
            let sada = simd::mul_f32(sc, da);
            let dasa = simd::mul_f32(dc, sa);
            let m = simd::min_f32(sada, dasa);
            let b = simd::mul_f32(sc, inv_da);
            let c = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| m[i] + b[i] + c[i])
        }
        Operator::Lighten => {
            let sada = simd::mul_f32(sc, da);
            let dasa = simd::mul_f32(dc, sa);
            let m = simd::max_f32(sada, dasa);
            let b = simd::mul_f32(sc, inv_da);
            let c = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| m[i] + b[i] + c[i])
        }
        Operator::Difference => {
            let sada = simd::mul_f32(sc, da);
            let dasa = simd::mul_f32(dc, sa);
            let m = simd::min_f32(sada, dasa);
            std::array::from_fn(|i| sc[i] + dc[i] - 2.0 * m[i])
        }
        Operator::Exclusion => {
            let sada = simd::mul_f32(sc, da);
            let dasa = simd::mul_f32(dc, sa);
            let scdc = simd::mul_f32(sc, dc);
            let b = simd::mul_f32(sc, inv_da);
            let c = simd::mul_f32(dc, inv_sa);
            std::array::from_fn(|i| sada[i] + dasa[i] - 2.0 * scdc[i] + b[i] + c[i])
        }
        Operator::Overlay => {
            let two_dc: LaneF32 = std::array::from_fn(|i| 2.0 * dc[i]);
            let cond = le_f32(two_dc, da);
            let lo = {
                let scdc = simd::mul_f32(sc, dc);
                let b = simd::mul_f32(sc, inv_da);
                let c = simd::mul_f32(dc, inv_sa);
                std::array::from_fn(|i| 2.0 * scdc[i] + b[i] + c[i])
            };
            let hi = {
                let sada = simd::mul_f32(sc, da);
                let dasa = simd::mul_f32(dc, sa);
                let dcsc = simd::mul_f32(dc, sc);
                let dasa2 = simd::mul_f32(da, sa);
                std::array::from_fn(|i| sc[i] + sada[i] + dc[i] + dasa[i] - 2.0 * dcsc[i] - dasa2[i])
            };
            simd::select_f32(cond, lo, hi)
        }
        Operator::HardLight => {
            let two_sc: LaneF32 = std::array::from_fn(|i| 2.0 * sc[i]);
            let cond = le_f32(two_sc, sa);
            let lo = {
                let scdc = simd::mul_f32(sc, dc);
                let b = simd::mul_f32(sc, inv_da);
                let c = simd::mul_f32(dc, inv_sa);
                std::array::from_fn(|i| 2.0 * scdc[i] + b[i] + c[i])
            };
            let hi = {
                let sada = simd::mul_f32(sc, da);
                let dasa = simd::mul_f32(dc, sa);
                let sadaa = simd::mul_f32(sa, da);
                let scdc = simd::mul_f32(sc, dc);
                std::array::from_fn(|i| sc[i] + sada[i] + dc[i] + dasa[i] - sadaa[i] - 2.0 * scdc[i])
            };
            simd::select_f32(cond, lo, hi)
        }
        Operator::ColorDodge => {
            std::array::from_fn(|i| scalar::color_dodge_f32(dc[i], sc[i], da[i], sa[i]))
        }
        Operator::ColorBurn => {
            std::array::from_fn(|i| scalar::color_burn_f32(dc[i], sc[i], da[i], sa[i]))
        }
        Operator::SoftLight => {
            std::array::from_fn(|i| scalar::soft_light_f32(dc[i], sc[i], da[i], sa[i]))
        }
        Operator::Hue | Operator::Saturation | Operator::Color | Operator::Luminosity => unreachable!(),
    }
}
