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
//! Three-tier range reduction of `x` to a multiple-of-`pi/256` octant count
//! `k` plus an in-octant residual `y = x - k*pi/256`, `|y| <= pi/512`.
//!
//! - `|x| < XMAX_CW2`: classic two-constant Cody-Waite, `k` fits a plain
//!   `f64` and `k * CW2_CH` is exact by construction of `CW2_CH`'s trailing
//!   zero bits.
//! - `XMAX_CW2 <= |x| < XMAX_DDRR`: the pi/256 double-double split, `k`
//!   extracted through the same exact-integer-product technique the
//!   Payne-Hanek tier uses (see [`reduce_digits`]), just with a 3-word
//!   window instead of a 41-word one.
//! - `|x| >= XMAX_DDRR`: full Payne-Hanek against the `256/pi` radix-`2^30`
//!   digit table, needed because no fixed-width Cody-Waite split can stay
//!   exact once `x`'s exponent dwarfs the digits of `pi/256` we can afford
//!   to keep around.
//!
//! All three tiers fall through to [`reduce_digits`] once `|x|` leaves the
//! small Cody-Waite-2 range: the only difference between the "DD" and
//! "Payne-Hanek" regimes described above is how many digit words of `256/pi`
//! the window needs to reach back to, which falls out of `x`'s exponent
//! automatically.
use crate::math::common::rintk;
use crate::math::consts::XMAX_CW2;
use crate::math::dekker::Dekker;
use crate::math::tables::{
    CW2_CH, CW2_CL, INV_PIO256_DIGITS, INV_PIO256_HI, PIO256_HI, PIO256_LO,
};

/// Octant count `k` (reduced mod 512, sign folded in) and in-octant
/// residual `y` in radians, `y.to_f64()` bounded by roughly `pi/512`.
pub(crate) struct Reduced {
    pub(crate) k: i64,
    pub(crate) y: Dekker,
}

/// Window width for the ordinary (non-escalated) multi-digit reduction:
/// enough words past the boundary digit to reconstruct the fractional
/// residual to well past double-double precision for any index != 0.
const DIGIT_WINDOW: i64 = 6;

/// Window width used when `index == 0` forces escalation: the table
/// reconstruction contributes nothing in that case, so cancellation in
/// `(yh, yl)` directly attacks accuracy and the reduction needs the extra
/// margin Kahan's worst-case analysis calls for.
const ESCALATED_DIGIT_WINDOW: i64 = 20;

/// `x = k*pi/256 + (yh+yl)`, tiered by `|x|` per the module doc, with the
/// `index == (k&127) == 0` escalation rule: whenever the chosen tier lands
/// exactly on an octant boundary, the subsequent table reconstruction has
/// nothing to add, so the reduction itself must carry full precision.
/// Escalating always re-derives `k` too, since a wider digit window can
/// shift it by +-1 relative to the fast estimate.
pub(crate) fn reduce(x: f64) -> Reduced {
    debug_assert!(x.is_finite());
    let ax = x.abs();
    let (mut k, mut y) = if ax < XMAX_CW2 {
        reduce_cw2(ax)
    } else {
        reduce_digits(ax, DIGIT_WINDOW)
    };
    if k.rem_euclid(128) == 0 {
        let (k2, y2) = reduce_digits(ax, ESCALATED_DIGIT_WINDOW);
        k = k2;
        y = y2;
    }
    fold_sign(x, k, y)
}

/// Same reduction, but always through the multi-digit path with a
/// caller-chosen window width. Used by the second-step fallback, which
/// wants more digits of margin than the fast path ever needs.
pub(crate) fn reduce_with_window(x: f64, window: i64) -> Reduced {
    debug_assert!(x.is_finite());
    let (k, y) = reduce_digits(x.abs(), window);
    fold_sign(x, k, y)
}

#[inline]
fn fold_sign(x: f64, k: i64, y: Dekker) -> Reduced {
    if x.is_sign_negative() {
        Reduced {
            k: (-k).rem_euclid(512),
            y: y.neg(),
        }
    } else {
        Reduced {
            k: k.rem_euclid(512),
            y,
        }
    }
}

/// Two-constant Cody-Waite, valid while `k * CW2_CH` stays an exact
/// product (see `CW2_CH`'s doc comment in `tables.rs` for the bound).
fn reduce_cw2(x: f64) -> (i64, Dekker) {
    let kf = rintk(x * INV_PIO256_HI);
    let r1 = x - kf * CW2_CH;
    let kcl = kf * CW2_CL;
    let y = Dekker::from_full_exact_add(r1, -kcl);
    (kf as i64, y)
}

/// Multi-digit reduction shared by the DD and Payne-Hanek tiers: split the
/// 53-bit mantissa of `x` against a window of [`INV_PIO256_DIGITS`] (base
/// `2^30`) chosen by `x`'s exponent, so that exactly one window word
/// straddles the integer/fraction boundary of `x * 256/pi`.
///
/// Every digit word below that boundary word contributes an exact multiple
/// of `2^30` to the integer part `k`, hence is congruent to `0 mod 512` and
/// can be dropped; every word above it is purely fractional. So only the
/// boundary word feeds `k mod 512`, and a handful of words above it
/// (`WINDOW`, chosen generously past the 2-word worst-case cancellation
/// Kahan's analysis of this style of reduction calls for) reconstruct the
/// fractional residual to well past double-double precision.
fn reduce_digits(x: f64, window: i64) -> (i64, Dekker) {
    let bits = x.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i64 - 1023;
    let mantissa = ((bits & 0x000f_ffff_ffff_ffff) | (1u64 << 52)) as u128;
    let s = exp - 52;

    let n = INV_PIO256_DIGITS.len() as i64;
    let istar = s.div_euclid(30).clamp(0, n - 1);
    let e_star = s - 30 * istar;

    let t_star = mantissa * INV_PIO256_DIGITS[istar as usize] as u128;
    let (k_from_boundary, mut frac) = if e_star >= 0 {
        let k = ((t_star << e_star) % 512) as i64;
        (k, Dekker::new(0.0, 0.0))
    } else {
        let shift = (-e_star) as u32;
        let k = ((t_star >> shift) % 512) as i64;
        let kept = (t_star & ((1u128 << shift) - 1)) as f64;
        (k, Dekker::new(0.0, kept * pow2_exact(e_star)))
    };

    let mut j = 1;
    while j <= window {
        let idx = istar + j;
        if idx >= n {
            break;
        }
        let e_j = e_star - 30 * j;
        let t_j = mantissa * INV_PIO256_DIGITS[idx as usize] as u128;
        // t_j fits in 83 bits; for any window width used here e_j is
        // never positive (e_star < 30, j >= 1), so this is always a pure
        // right-shift scaling, never an overflow risk.
        let term = (t_j as f64) * pow2_exact(e_j);
        frac = Dekker::add(frac, Dekker::new(0.0, term));
        j += 1;
    }

    let mut k = k_from_boundary;
    if frac.to_f64() >= 0.5 {
        k += 1;
        frac = Dekker::add(frac, Dekker::new(0.0, -1.0));
    }

    let pio256 = Dekker::new(PIO256_LO, PIO256_HI);
    let y = Dekker::quick_mult(frac, pio256);
    (k, y)
}

/// `2^e` for `e` in a range small enough to never overflow/underflow the
/// magnitudes this module deals with (`|e| < 1074`), computed without
/// going through `common::pow2i`'s `i32`-biased-exponent trick since here
/// `e` is an `i64` that can legitimately be negative by more than `i32`
/// would comfortably round-trip through a plain cast in debug builds.
#[inline]
fn pow2_exact(e: i64) -> f64 {
    debug_assert!((-1074..=1023).contains(&e));
    f64::from_bits(((e + 1023) as u64) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_argument_reduces_to_itself_in_octant_zero() {
        let r = reduce(0.01);
        assert_eq!(r.k, 0);
        assert!((r.y.to_f64() - 0.01).abs() < 1e-18);
    }

    #[test]
    fn pi_over_256_reduces_to_octant_one_with_near_zero_residual() {
        let r = reduce(std::f64::consts::PI / 256.0);
        assert_eq!(r.k, 1);
        assert!(r.y.to_f64().abs() < 1e-9);
    }

    #[test]
    fn reduction_is_odd_in_x() {
        let pos = reduce(12345.6789);
        let neg = reduce(-12345.6789);
        assert_eq!(neg.k, (-pos.k).rem_euclid(512));
        assert!((neg.y.to_f64() + pos.y.to_f64()).abs() < 1e-9);
    }

    #[test]
    fn large_argument_takes_the_digit_path_and_stays_in_range() {
        let r = reduce(1.0e18);
        assert!(r.y.to_f64().abs() <= std::f64::consts::PI / 512.0 + 1e-12);
    }

    #[test]
    fn near_overflow_argument_still_produces_a_bounded_residual() {
        let r = reduce(f64::MAX / 4.0);
        assert!(r.y.to_f64().abs() <= std::f64::consts::PI / 512.0 + 1e-9);
    }
}
