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
//! The twelve public entry points: sine, cosine and tangent, each under
//! all four IEEE-754 rounding attributes. Every function follows the same
//! shape — a NaN/Inf check, a no-reduction small-`x` identity, a
//! no-reduction polynomial tier, a fully-reduced tier — and defers to the
//! second step (`scs` module) whenever its own rounding test can't certify
//! the fast-path candidate.
use crate::math::common::{abs_hi32, next_bits_down, pred, succ};
use crate::math::consts::*;
use crate::math::dekker::Dekker;
use crate::math::eval::{eval_sin_cos, eval_sincos_zero, eval_tan_fast, eval_tan_small};
use crate::math::reduce::reduce;
use crate::math::round::{round_directed, round_nearest, Mode, RoundResult};
use crate::math::scs::{fallback_directed, fallback_rn, Func};

#[inline]
fn is_nan_or_inf(x: f64) -> bool {
    abs_hi32(x) >= 0x7ff0_0000
}

/// Which no-table tier produced a sine/cosine double-double candidate,
/// since round-to-nearest and the directed modes each need a different
/// constant depending on which one it was.
enum Tier {
    Case2,
    Case3,
}

fn sin_dd(x: f64) -> (Dekker, Tier) {
    if x.abs() < XMAX_SIN_CASE2 {
        (eval_sincos_zero(Dekker::new(0.0, x)).sin, Tier::Case2)
    } else {
        let r = reduce(x);
        (eval_sin_cos(r.k, r.y).sin, Tier::Case3)
    }
}

fn cos_dd(x: f64) -> (Dekker, Tier) {
    if x.abs() < XMAX_COS_CASE2 {
        (eval_sincos_zero(Dekker::new(0.0, x)).cos, Tier::Case2)
    } else {
        let r = reduce(x);
        (eval_sin_cos(r.k, r.y).cos, Tier::Case3)
    }
}

// ---------------------------------------------------------------------
// sine
// ---------------------------------------------------------------------

pub fn sin_rn(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_SIN {
        return x;
    }
    let (dd, tier) = sin_dd(x);
    let rn_cst = match tier {
        Tier::Case2 => RN_CST_SIN_CASE2,
        Tier::Case3 => RN_CST_SIN_CASE3,
    };
    match round_nearest(dd.hi, dd.lo, rn_cst) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_rn(Func::Sin, x),
    }
}

pub fn sin_ru(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_SIN {
        return if x >= 0.0 { x } else { succ(x) };
    }
    let (dd, tier) = sin_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_SIN_CASE2,
        Tier::Case3 => EPS_SIN_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::Up) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Sin, x, Mode::Up),
    }
}

pub fn sin_rd(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_SIN {
        return if x <= 0.0 { x } else { pred(x) };
    }
    let (dd, tier) = sin_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_SIN_CASE2,
        Tier::Case3 => EPS_SIN_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::Down) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Sin, x, Mode::Down),
    }
}

pub fn sin_rz(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_SIN {
        // sin(0) == 0 exactly; every nonzero small x shrinks by one ulp
        // toward zero regardless of sign.
        return if x == 0.0 { x } else { next_bits_down(x.abs()).copysign(x) };
    }
    let (dd, tier) = sin_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_SIN_CASE2,
        Tier::Case3 => EPS_SIN_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::TowardZero) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Sin, x, Mode::TowardZero),
    }
}

// ---------------------------------------------------------------------
// cosine
// ---------------------------------------------------------------------

pub fn cos_rn(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_1_FOR_COS {
        return 1.0;
    }
    let (dd, tier) = cos_dd(x);
    let rn_cst = match tier {
        Tier::Case2 => RN_CST_COS_CASE2,
        Tier::Case3 => RN_CST_COS_CASE3,
    };
    match round_nearest(dd.hi, dd.lo, rn_cst) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_rn(Func::Cos, x),
    }
}

pub fn cos_ru(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_1_FOR_COS {
        return 1.0;
    }
    let (dd, tier) = cos_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_COS_CASE2,
        Tier::Case3 => EPS_COS_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::Up) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Cos, x, Mode::Up),
    }
}

pub fn cos_rd(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x.abs() < XMAX_RETURN_1_FOR_COS {
        return ONE_ROUNDED_DOWN;
    }
    let (dd, tier) = cos_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_COS_CASE2,
        Tier::Case3 => EPS_COS_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::Down) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Cos, x, Mode::Down),
    }
}

pub fn cos_rz(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x.abs() < XMAX_RETURN_1_FOR_COS {
        return ONE_ROUNDED_DOWN;
    }
    let (dd, tier) = cos_dd(x);
    let eps = match tier {
        Tier::Case2 => EPS_COS_CASE2,
        Tier::Case3 => EPS_COS_CASE3,
    };
    match round_directed(dd.hi, dd.lo, eps, Mode::TowardZero) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Cos, x, Mode::TowardZero),
    }
}

// ---------------------------------------------------------------------
// tangent
// ---------------------------------------------------------------------

pub fn tan_rn(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_TAN {
        return x;
    }
    if x.abs() < XMAX_TAN_CASE2 {
        let y = Dekker::new(0.0, x);
        let fast = eval_tan_fast(y);
        if let RoundResult::Value(v) = round_nearest(fast.hi, fast.lo, RN_CST_TAN_CASE22) {
            return v;
        }
        let refined = eval_tan_small(y);
        if let RoundResult::Value(v) = round_nearest(refined.hi, refined.lo, RN_CST_TAN_CASE21) {
            return v;
        }
        return fallback_rn(Func::Tan, x);
    }
    let r = reduce(x);
    let sc = eval_sin_cos(r.k, r.y);
    let t = Dekker::div(sc.sin, sc.cos);
    match round_nearest(t.hi, t.lo, RN_CST_TAN_CASE3) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_rn(Func::Tan, x),
    }
}

pub fn tan_ru(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_TAN {
        return if x <= 0.0 { x } else { succ(x) };
    }
    if x.abs() < XMAX_TAN_CASE2 {
        let y = Dekker::new(0.0, x);
        let fast = eval_tan_fast(y);
        if let RoundResult::Value(v) = round_directed(fast.hi, fast.lo, EPS_TAN_CASE22, Mode::Up) {
            return v;
        }
        let refined = eval_tan_small(y);
        if let RoundResult::Value(v) = round_directed(refined.hi, refined.lo, EPS_TAN_CASE21, Mode::Up) {
            return v;
        }
        return fallback_directed(Func::Tan, x, Mode::Up);
    }
    let r = reduce(x);
    let sc = eval_sin_cos(r.k, r.y);
    let t = Dekker::div(sc.sin, sc.cos);
    match round_directed(t.hi, t.lo, EPS_TAN_CASE3, Mode::Up) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Tan, x, Mode::Up),
    }
}

pub fn tan_rd(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    if x.abs() < XMAX_RETURN_X_FOR_TAN {
        return if x >= 0.0 { x } else { pred(x) };
    }
    if x.abs() < XMAX_TAN_CASE2 {
        let y = Dekker::new(0.0, x);
        let fast = eval_tan_fast(y);
        if let RoundResult::Value(v) = round_directed(fast.hi, fast.lo, EPS_TAN_CASE22, Mode::Down) {
            return v;
        }
        let refined = eval_tan_small(y);
        if let RoundResult::Value(v) = round_directed(refined.hi, refined.lo, EPS_TAN_CASE21, Mode::Down) {
            return v;
        }
        return fallback_directed(Func::Tan, x, Mode::Down);
    }
    let r = reduce(x);
    let sc = eval_sin_cos(r.k, r.y);
    let t = Dekker::div(sc.sin, sc.cos);
    match round_directed(t.hi, t.lo, EPS_TAN_CASE3, Mode::Down) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Tan, x, Mode::Down),
    }
}

pub fn tan_rz(x: f64) -> f64 {
    if is_nan_or_inf(x) {
        return x - x;
    }
    // |tan(x)| >= |x| always, so x itself is already tan(x) rounded toward
    // zero in this range; unlike sin/cos, no bit nudge is ever needed here.
    if x.abs() < XMAX_RETURN_X_FOR_TAN {
        return x;
    }
    if x.abs() < XMAX_TAN_CASE2 {
        let y = Dekker::new(0.0, x);
        let fast = eval_tan_fast(y);
        if let RoundResult::Value(v) =
            round_directed(fast.hi, fast.lo, EPS_TAN_CASE22, Mode::TowardZero)
        {
            return v;
        }
        let refined = eval_tan_small(y);
        if let RoundResult::Value(v) =
            round_directed(refined.hi, refined.lo, EPS_TAN_CASE21, Mode::TowardZero)
        {
            return v;
        }
        return fallback_directed(Func::Tan, x, Mode::TowardZero);
    }
    let r = reduce(x);
    let sc = eval_sin_cos(r.k, r.y);
    let t = Dekker::div(sc.sin, sc.cos);
    match round_directed(t.hi, t.lo, EPS_TAN_CASE3, Mode::TowardZero) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => fallback_directed(Func::Tan, x, Mode::TowardZero),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_cos_agree_with_std_at_representative_points() {
        for &x in &[0.1, 1.0, 2.5, -3.0, 100.0, 1.0e6] {
            assert!((sin_rn(x) - x.sin()).abs() < 1e-12, "sin_rn({x})");
            assert!((cos_rn(x) - x.cos()).abs() < 1e-12, "cos_rn({x})");
        }
    }

    #[test]
    fn tan_matches_sin_over_cos() {
        for &x in &[0.2, 1.0, -1.3, 50.0] {
            let expected = x.sin() / x.cos();
            assert!((tan_rn(x) - expected).abs() < 1e-9, "tan_rn({x})");
        }
    }

    #[test]
    fn zero_is_exact_in_every_mode() {
        assert_eq!(sin_rn(0.0), 0.0);
        assert_eq!(sin_ru(0.0), 0.0);
        assert_eq!(sin_rd(0.0), 0.0);
        assert_eq!(sin_rz(0.0), 0.0);
        assert_eq!(cos_rn(0.0), 1.0);
        assert_eq!(cos_ru(0.0), 1.0);
        assert_eq!(cos_rd(0.0), 1.0);
        assert_eq!(cos_rz(0.0), 1.0);
        assert_eq!(tan_rn(0.0), 0.0);
        assert_eq!(tan_rz(0.0), 0.0);
    }

    #[test]
    fn nan_and_infinity_propagate_as_nan() {
        assert!(sin_rn(f64::NAN).is_nan());
        assert!(sin_rn(f64::INFINITY).is_nan());
        assert!(cos_rd(f64::NEG_INFINITY).is_nan());
        assert!(tan_ru(f64::INFINITY).is_nan());
    }

    #[test]
    fn directed_modes_bracket_round_to_nearest() {
        for &x in &[0.3, 1.7, -2.2, 12345.6789] {
            assert!(sin_rd(x) <= sin_rn(x));
            assert!(sin_rn(x) <= sin_ru(x));
            assert!(cos_rd(x) <= cos_rn(x));
            assert!(cos_rn(x) <= cos_ru(x));
        }
    }

    #[test]
    fn small_x_identities_hold_across_modes() {
        let x = 1.0e-10;
        assert_eq!(sin_rn(x), x);
        assert_eq!(tan_rn(x), x);
        assert_eq!(cos_rn(x), 1.0);
        assert!(sin_ru(x) >= x);
        assert!(sin_rd(-x) <= -x);
        assert_eq!(cos_rd(x), ONE_ROUNDED_DOWN);
    }

    #[test]
    fn sign_is_odd_for_sin_and_tan_even_for_cos() {
        for &x in &[0.5, 3.0, 1.0e8] {
            assert_eq!(sin_rn(-x), -sin_rn(x));
            assert_eq!(tan_rn(-x), -tan_rn(x));
            assert_eq!(cos_rn(-x), cos_rn(x));
        }
    }

    #[test]
    fn survives_payne_hanek_scale_arguments() {
        let x = 1.0e300;
        assert!(sin_rn(x).abs() <= 1.0);
        assert!(cos_rn(x).abs() <= 1.0);
        assert!(tan_rn(x).is_finite());
    }

    #[test]
    fn agrees_with_std_across_random_moderate_arguments() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let x: f64 = rng.random_range(-1.0e6..1.0e6);
            assert!((sin_rn(x) - x.sin()).abs() < 1.0e-9, "sin diverged at {x}");
            assert!((cos_rn(x) - x.cos()).abs() < 1.0e-9, "cos diverged at {x}");
            assert!(sin_rd(x) <= sin_rn(x) && sin_rn(x) <= sin_ru(x), "sin modes misordered at {x}");
            assert!(cos_rd(x) <= cos_rn(x) && cos_rn(x) <= cos_ru(x), "cos modes misordered at {x}");
        }
    }
}
