//! The 4 non-separable HSL-luma kernels (hue/saturation/color/luminosity),
//! float precision only. Grounded in the PDF/W3C Compositing and Blending
//! `Lum`/`Sat`/`SetLum`/`SetSat`/`ClipColor` formulas.
//!
//! Those formulas are given in terms of non-premultiplied `Cs`/`Cb`; this
//! module resolves "src"/"dst" as straight (demultiplied) color (an Open
//! Question, recorded in `DESIGN.md`), converts premultiplied input to
//! straight, blends, then recomposes with the standard general compositing
//! formula `Sa*Da*B(Cb,Cs) + Sc*(1-Da) + Dc*(1-Sa)`.

use crate::operator::Operator;

type Rgb = [f32; 3];

#[inline]
fn lum(c: Rgb) -> f32 {
    0.3 * c[0] + 0.59 * c[1] + 0.11 * c[2]
}

#[inline]
fn sat(c: Rgb) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

fn clip_color(c: Rgb) -> Rgb {
    let l = lum(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    let mut out = c;
    if n < 0.0 && l != n {
        for v in out.iter_mut() {
            *v = l + (*v - l) * l / (l - n);
        }
    }
    if x > 1.0 && x != l {
        for v in out.iter_mut() {
            *v = l + (*v - l) * (1.0 - l) / (x - l);
        }
    }
    out
}

fn set_lum(c: Rgb, l: f32) -> Rgb {
    let d = l - lum(c);
    clip_color([c[0] + d, c[1] + d, c[2] + d])
}

fn set_sat(c: Rgb, s: f32) -> Rgb {
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&a, &b| c[a].partial_cmp(&c[b]).unwrap());
    let (lo, mid, hi) = (idx[0], idx[1], idx[2]);
    let mut out = [0.0f32; 3];
    if c[hi] > c[lo] {
        out[mid] = (c[mid] - c[lo]) * s / (c[hi] - c[lo]);
        out[hi] = s;
    }
    out[lo] = 0.0;
    out
}

/// Blends straight colors `cb` (backdrop) and `cs` (source) under `op`.
fn blend(op: Operator, cb: Rgb, cs: Rgb) -> Rgb {
    match op {
        Operator::Hue => set_lum(set_sat(cs, sat(cb)), lum(cb)),
        Operator::Saturation => set_lum(set_sat(cb, sat(cs)), lum(cb)),
        Operator::Color => set_lum(cs, lum(cb)),
        Operator::Luminosity => set_lum(cb, lum(cs)),
        _ => unreachable!("non-separable kernel called with separable operator"),
    }
}

/// Evaluates one of the 4 non-separable operators on premultiplied pixels.
pub fn apply(op: Operator, dst: [f32; 4], src: [f32; 4]) -> [f32; 4] {
    let [dr, dg, db, da] = dst;
    let [sr, sg, sb, sa] = src;

    let cb = if da > 0.0 { [dr / da, dg / da, db / da] } else { [0.0, 0.0, 0.0] };
    let cs = if sa > 0.0 { [sr / sa, sg / sa, sb / sa] } else { [0.0, 0.0, 0.0] };
    let b = blend(op, cb, cs);

    let inv_da = 1.0 - da;
    let inv_sa = 1.0 - sa;
    let sada = sa * da;
    let r = sada * b[0] + sr * inv_da + dr * inv_sa;
    let g = sada * b[1] + sg * inv_da + dg * inv_sa;
    let bch = sada * b[2] + sb * inv_da + db * inv_sa;
    let a = sa + da - sada;
    [r, g, bch, a]
}
