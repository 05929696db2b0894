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
//! The rounding test: decides whether a double-double candidate result
//! `(rh, rl)` is close enough to the true value that rounding `rh` (nudged
//! by one ulp when `rl`'s sign says so) in the requested mode is certainly
//! correct, or whether the fast path has to defer to the slow path.
//!
//! Round-to-nearest only needs `rh`'s own rounding: if adding `rl` scaled
//! up by a conservative margin doesn't change `rh`, `rh` was already the
//! correctly-rounded nearest double. The three directed modes need to know
//! which side of `rh` the true value sits on, which is what the `u`/`u53`
//! bit-manipulation test below establishes without an explicit division.
pub(crate) enum Mode {
    Up,
    Down,
    TowardZero,
}

pub(crate) enum RoundResult {
    Value(f64),
    Uncertain,
}

/// `rh == rn(rh + rl * rn_cst)`: round-to-nearest is correct as long as
/// the candidate correction `rl` (scaled up by `rn_cst` to model the
/// reconstruction's worst-case relative error) can't flip `rh` to its
/// neighbor.
#[inline]
pub(crate) fn round_nearest(rh: f64, rl: f64, rn_cst: f64) -> RoundResult {
    if rh == rh + rl * rn_cst {
        RoundResult::Value(rh)
    } else {
        RoundResult::Uncertain
    }
}

/// Directed-rounding test: certifies `rh`'s neighbor in the requested
/// direction as long as `|rl|` clears `eps * u53`, where `u53` is (twice)
/// the weight of `rh`'s leading bit and `u` is `ulp(rh)`, both derived by
/// bit manipulation of `rh`'s exponent field rather than by division.
#[inline]
pub(crate) fn round_directed(rh: f64, rl: f64, eps: f64, mode: Mode) -> RoundResult {
    let exp_field = rh.to_bits() & 0x7ff0_0000_0000_0000;
    let u53 = f64::from_bits(exp_field + 0x0010_0000_0000_0000);
    let u = f64::from_bits((exp_field + 0x0010_0000_0000_0000).wrapping_sub(0x0350_0000_0000_0000));

    if rl.abs() <= eps * u53 {
        return RoundResult::Uncertain;
    }

    let value = match mode {
        Mode::Up => {
            if rl > 0.0 {
                rh + u
            } else {
                rh
            }
        }
        Mode::Down => {
            if rl > 0.0 {
                rh
            } else {
                rh - u
            }
        }
        Mode::TowardZero => {
            if rh >= 0.0 {
                if rl > 0.0 { rh } else { rh - u }
            } else if rl > 0.0 {
                rh + u
            } else {
                rh
            }
        }
    };
    RoundResult::Value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_certifies_when_correction_is_negligible() {
        match round_nearest(1.0, 1e-300, 2f64.powi(9)) {
            RoundResult::Value(v) => assert_eq!(v, 1.0),
            RoundResult::Uncertain => panic!("expected certification"),
        }
    }

    #[test]
    fn nearest_defers_when_correction_could_flip_rounding() {
        let rh = 1.0;
        let rl = f64::EPSILON / 4.0;
        match round_nearest(rh, rl, 2f64.powi(31)) {
            RoundResult::Uncertain => {}
            RoundResult::Value(_) => panic!("expected the fast path to defer"),
        }
    }

    #[test]
    fn directed_up_picks_the_next_float_when_correction_is_positive() {
        let rh = 1.0;
        let rl = 1e-20;
        match round_directed(rh, rl, 2f64.powi(-60), Mode::Up) {
            RoundResult::Value(v) => assert!(v > rh),
            RoundResult::Uncertain => panic!("expected certification"),
        }
    }

    #[test]
    fn directed_down_keeps_rh_when_correction_is_positive() {
        let rh = 1.0;
        let rl = 1e-20;
        match round_directed(rh, rl, 2f64.powi(-60), Mode::Down) {
            RoundResult::Value(v) => assert_eq!(v, rh),
            RoundResult::Uncertain => panic!("expected certification"),
        }
    }

    #[test]
    fn toward_zero_mirrors_sign_of_rh() {
        let rh = -1.0;
        let rl = -1e-20;
        match round_directed(rh, rl, 2f64.powi(-60), Mode::TowardZero) {
            RoundResult::Value(v) => assert!(v > rh),
            RoundResult::Uncertain => panic!("expected certification"),
        }
    }
}
