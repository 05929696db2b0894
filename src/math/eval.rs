/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Table lookup plus polynomial reconstruction: turns an octant count `k`
//! and an in-octant residual `y` (radians, `|y| <= pi/512`) into a
//! double-double `(sin x, cos x)` pair, and a standalone small-residue
//! tangent polynomial for the two no-table tangent tiers.
use crate::math::dekker::Dekker;
use crate::math::tables::{C2, C4, C6, S3, S5, S7, T11, T13, T15, T3_HI, T3_LO, T5, T7, T9};
use crate::math::tables::sincos_entry;

pub(crate) struct SinCos {
    pub(crate) sin: Dekker,
    pub(crate) cos: Dekker,
}

/// `index == 0`: `y` is measured directly from a table entry of `(0, 1)`,
/// so the reconstruction degenerates to the bare Taylor polynomial
/// (`DoSinZero`/`DoCosZero` in the source this was ported from). Also used
/// directly by the no-reduction small-`x` tiers (`XMAX_SIN_CASE2`,
/// `XMAX_COS_CASE2`), which are exactly the `index == 0`, `yl == 0` case.
pub(crate) fn eval_sincos_zero(y: Dekker) -> SinCos {
    let yh = y.hi;
    let yl = y.lo;
    let yh2 = yh * yh;

    let ts = yh2 * (S3 + yh2 * (S5 + yh2 * S7));
    let sin = Dekker::from_full_exact_add(yh, yl + ts * yh);

    let tc = yh2 * (C2 + yh2 * (C4 + yh2 * C6));
    let cos = Dekker::from_full_exact_add(1.0, tc);

    SinCos { sin, cos }
}

/// `index != 0`: combine the table entry `(sah, cah)` for `index*pi/256`
/// with the small-residue polynomial via the angle-sum identities
/// `sin(a+y) = sah*cos(y) + cah*sin(y)`, `cos(a+y) = cah*cos(y) -
/// sah*sin(y)`, approximating `cos(y) ~= 1 + tc` and `sin(y) ~= y*(1+ts)`.
fn eval_sincos_table(index: usize, y: Dekker) -> SinCos {
    let (sah, cah) = sincos_entry(index);
    let yh = y.hi;
    let yl = y.lo;
    let yh2 = yh * yh;

    let ts = yh2 * (S3 + yh2 * (S5 + yh2 * S7));
    let tc = yh2 * (C2 + yh2 * (C4 + yh2 * C6));

    let cah_y = Dekker::quick_mult(cah, y);
    let sah_y = Dekker::quick_mult(sah, y);

    let sin = Dekker::add(
        sah,
        Dekker::add(
            cah_y,
            Dekker::new(0.0, sah.hi * tc + cah.hi * yh * ts),
        ),
    );
    let cos = Dekker::add(
        cah,
        Dekker::add(
            sah_y.neg(),
            Dekker::new(0.0, cah.hi * tc - sah.hi * yh * ts),
        ),
    );

    SinCos { sin, cos }
}

/// `sin(k*pi/256 + y)`, `cos(k*pi/256 + y)` for the full argument `x`
/// (`k` already reduced mod 512 by the range reducer), folded through the
/// quadrant the octant index falls in.
pub(crate) fn eval_sin_cos(k: i64, y: Dekker) -> SinCos {
    debug_assert!((0..512).contains(&k));
    let idx = (k % 128) as usize;
    let quadrant = (k / 128) % 4;

    let t = if idx == 0 {
        eval_sincos_zero(y)
    } else {
        eval_sincos_table(idx, y)
    };

    match quadrant {
        0 => t,
        1 => SinCos {
            sin: t.cos,
            cos: t.sin.neg(),
        },
        2 => SinCos {
            sin: t.sin.neg(),
            cos: t.cos.neg(),
        },
        _ => SinCos {
            sin: t.cos.neg(),
            cos: t.sin,
        },
    }
}

/// `tan(y) - y` for small `|y|` with no table and no range reduction,
/// used by the tangent fast path's two no-table rounding-test tiers.
/// `T3` is kept as a double-double since it dominates the residual error.
pub(crate) fn eval_tan_small(y: Dekker) -> Dekker {
    let yh = y.hi;
    let yl = y.lo;
    let yh2 = yh * yh;

    let tail = yh2 * (T5 + yh2 * (T7 + yh2 * (T9 + yh2 * (T11 + yh2 * (T13 + yh2 * T15)))));
    let t3 = Dekker::new(T3_LO, T3_HI);
    let inner = Dekker::add(t3, Dekker::new(0.0, tail));

    let y3 = yh * yh2;
    let correction = inner.to_f64() * y3;
    Dekker::from_full_exact_add(yh, yl + correction)
}

/// Cheaper single-rounding version of [`eval_tan_small`], used as the
/// tangent fast path's first rounding-test tier (`RN_CST_TAN_CASE22`):
/// `T3` is a plain `f64` instead of a double-double, trading accuracy for
/// speed. When its rounding test fails, the caller retries with
/// [`eval_tan_small`] (`RN_CST_TAN_CASE21`) before falling back to full
/// range reduction.
pub(crate) fn eval_tan_fast(y: Dekker) -> Dekker {
    let yh = y.hi;
    let yl = y.lo;
    let yh2 = yh * yh;

    let tail = yh2 * (T3_HI + yh2 * (T5 + yh2 * (T7 + yh2 * (T9 + yh2 * (T11 + yh2 * (T13 + yh2 * T15))))));
    let y3 = yh * yh2;
    let correction = tail * y3;
    Dekker::from_full_exact_add(yh, yl + correction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_residual_gives_zero_one() {
        let sc = eval_sincos_zero(Dekker::new(0.0, 0.0));
        assert_eq!(sc.sin.to_f64(), 0.0);
        assert_eq!(sc.cos.to_f64(), 1.0);
    }

    #[test]
    fn table_reconstruction_matches_std_at_pi_over_4() {
        let sc = eval_sin_cos(64, Dekker::new(0.0, 0.0));
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((sc.sin.to_f64() - expected).abs() < 1e-15);
        assert!((sc.cos.to_f64() - expected).abs() < 1e-15);
    }

    #[test]
    fn quadrant_two_negates_both() {
        let base = eval_sin_cos(10, Dekker::new(0.0, 0.0));
        let rotated = eval_sin_cos(138, Dekker::new(0.0, 0.0));
        assert!((rotated.sin.to_f64() + base.sin.to_f64()).abs() < 1e-14);
        assert!((rotated.cos.to_f64() + base.cos.to_f64()).abs() < 1e-14);
    }

    #[test]
    fn small_tan_residual_matches_identity_near_zero() {
        let t = eval_tan_small(Dekker::new(0.0, 1e-4));
        assert!((t.to_f64() - 1e-4).abs() < 1e-18);
    }

    #[test]
    fn fast_and_refined_tan_agree_closely_for_small_y() {
        let y = Dekker::new(0.0, 1e-3);
        let fast = eval_tan_fast(y);
        let refined = eval_tan_small(y);
        assert!((fast.to_f64() - refined.to_f64()).abs() < 1e-18);
    }
}
