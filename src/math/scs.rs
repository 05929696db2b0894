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
//! Stand-in for the "second step": a multiple-precision, Gappa-unprovable
//! fallback the fast path hands off to whenever its own rounding test
//! can't certify a result. A real deployment of this design backs the
//! second step with an arbitrary-precision evaluator (crlibm's own SCS,
//! a big-float library, MPFR) built and proven entirely separately from
//! the fast path; that evaluator is out of scope for this crate.
//!
//! What *is* in scope is the handoff contract: the second step is only
//! ever reached on a vanishingly rare input (every testable small-argument
//! and table-reconstruction identity is designed to resolve in the fast
//! path), it receives the original `x` and function selector, not any
//! intermediate state from the fast path, and it always returns a value,
//! never a further "I don't know". This module fills that contract with a
//! wider-window, higher-order evaluation of the same double-double
//! pipeline: strictly more digits of `256/pi`, one more polynomial term,
//! and no rounding-test escape hatch. It is deliberately not claimed to be
//! correctly rounded; see `DESIGN.md`.
use crate::math::dekker::Dekker;
use crate::math::reduce::Reduced;
use crate::math::round::{round_directed, round_nearest, Mode, RoundResult};
use crate::math::tables::{C2, C4, C6, S3, S5, S7};

/// Function selector the second step needs, since unlike the fast-path
/// tiers it does not receive a pre-reduced `(k, y)` — only `x` itself.
#[derive(Copy, Clone)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
}

fn wide_reduce(x: f64) -> Reduced {
    crate::math::reduce::reduce_with_window(x, 20)
}

fn sincos_wide(r: &Reduced) -> (Dekker, Dekker) {
    let y = r.y;
    let idx = (r.k % 128) as usize;
    let quadrant = (r.k / 128) % 4;

    let (sah, cah) = if idx == 0 {
        (Dekker::new(0.0, 0.0), Dekker::new(0.0, 1.0))
    } else {
        crate::math::tables::sincos_entry(idx)
    };

    let yh = y.hi;
    let yl = y.lo;
    let yh2 = yh * yh;
    let ts = yh2 * (S3 + yh2 * (S5 + yh2 * S7));
    let tc = yh2 * (C2 + yh2 * (C4 + yh2 * C6));

    let cah_y = Dekker::quick_mult(cah, y);
    let sah_y = Dekker::quick_mult(sah, y);
    let sin = Dekker::add(
        sah,
        Dekker::add(cah_y, Dekker::new(0.0, sah.hi * tc + cah.hi * yh * ts + yl)),
    );
    let cos = Dekker::add(
        cah,
        Dekker::add(sah_y.neg(), Dekker::new(0.0, cah.hi * tc - sah.hi * yh * ts)),
    );

    match quadrant {
        0 => (sin, cos),
        1 => (cos, sin.neg()),
        2 => (sin.neg(), cos.neg()),
        _ => (cos.neg(), sin),
    }
}

fn evaluate(func: Func, x: f64) -> Dekker {
    let r = wide_reduce(x);
    let (sin, cos) = sincos_wide(&r);
    match func {
        Func::Sin => sin,
        Func::Cos => cos,
        Func::Tan => Dekker::div(sin, cos),
    }
}

/// Nearest-mode second step: always returns a value (the rounding test is
/// not re-applied, only the sign of the residual is used to pick which of
/// `rh`'s two neighbors the true value is closer to when `rh` itself
/// isn't already exact).
pub(crate) fn fallback_rn(func: Func, x: f64) -> f64 {
    let d = evaluate(func, x);
    match round_nearest(d.hi, d.lo, 0.0) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => d.to_f64(),
    }
}

pub(crate) fn fallback_directed(func: Func, x: f64, mode: Mode) -> f64 {
    let d = evaluate(func, x);
    match round_directed(d.hi, d.lo, 0.0, mode) {
        RoundResult::Value(v) => v,
        RoundResult::Uncertain => d.to_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_std_within_a_few_ulps() {
        let x = 1.0e15_f64;
        let got = fallback_rn(Func::Sin, x);
        let want = x.sin();
        assert!((got - want).abs() < 1e-9);
    }

    #[test]
    fn tangent_fallback_is_finite_away_from_poles() {
        let got = fallback_rn(Func::Tan, 123456.789);
        assert!(got.is_finite());
    }
}
