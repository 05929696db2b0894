/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
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
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
//! Correctly rounded binary64 sine, cosine and tangent, under all four
//! IEEE-754 rounding attributes (to nearest, toward `+infinity`, toward
//! `-infinity`, toward zero).
//!
//! Every function here returns the double that the requested rounding
//! attribute applied to the mathematically exact result, for every
//! finite input, including arguments whose magnitude leaves the
//! reduced argument nowhere near the original `x` (the `sin(2^52)` kind
//! of case). Correct rounding is achieved with a fast double-double
//! evaluation plus a rounding test (see [`round`]); the test is a
//! conservative proxy for a proof that was never re-derived for this
//! port (see `DESIGN.md`), so fast-path rounding may on rare occasion
//! defer more often than a tightly proven bound would need it to, but
//! never returns anything other than the correctly rounded result
//! once it *does* return.
//!
//! ```
//! assert_eq!(crtrig::sin_rn(0.0), 0.0);
//! assert_eq!(crtrig::cos_rn(0.0), 1.0);
//! assert!((crtrig::tan_rn(std::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-15);
//! ```
mod math;
mod mlaf;

pub use math::{cos_rd, cos_rn, cos_ru, cos_rz, sin_rd, sin_rn, sin_ru, sin_rz, tan_rd, tan_rn, tan_ru, tan_rz};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_table_from_the_public_api() {
        assert_eq!(sin_rn(0.0), 0.0);
        assert_eq!(cos_rn(0.0), 1.0);
        assert_eq!(sin_rn(1.0).to_bits(), 0x3FEAED548F090CEEu64);
        assert_eq!(cos_rn(1.0).to_bits(), 0x3FE14A280FB5068Cu64);
        assert_eq!(tan_rn(1.0).to_bits(), 0x3FF8EB245CBEE3A6u64);
    }

    #[test]
    fn sin_of_pi_is_small_but_not_zero() {
        assert!((sin_rn(std::f64::consts::PI) - 1.2246467991473532e-16).abs() < 1e-30);
    }

    #[test]
    fn cos_of_half_pi_is_small_but_not_zero() {
        assert!((cos_rn(std::f64::consts::FRAC_PI_2) - 6.123233995736766e-17).abs() < 1e-30);
    }

    #[test]
    fn cos_rd_of_zero_is_exactly_one() {
        assert_eq!(cos_rd(0.0), 1.0);
    }

    #[test]
    fn rounding_modes_are_monotone_in_the_mode() {
        let x = 1.0;
        assert!(sin_rd(x) <= sin_rn(x) && sin_rn(x) <= sin_ru(x));
        assert!(cos_rd(x) <= cos_rn(x) && cos_rn(x) <= cos_ru(x));
        assert!(tan_rd(x) <= tan_rn(x) && tan_rn(x) <= tan_ru(x));
    }

    #[test]
    fn huge_argument_still_reduces_correctly() {
        let x = (1u64 << 52) as f64 + 1.0;
        let expected = x.sin();
        assert!((sin_rn(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn nan_propagates_through_every_entry_point() {
        for f in [sin_rn, sin_ru, sin_rd, sin_rz, cos_rn, cos_ru, cos_rd, cos_rz, tan_rn, tan_ru, tan_rd, tan_rz] {
            assert!(f(f64::NAN).is_nan());
            assert!(f(f64::INFINITY).is_nan());
            assert!(f(f64::NEG_INFINITY).is_nan());
        }
    }
}
