/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
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
use crate::mlaf::mlaf;

#[inline(always)]
pub(crate) fn f_fmla(a: f64, b: f64, c: f64) -> f64 {
    mlaf(c, a, b)
}

/// Round towards whole integral number
#[inline]
pub(crate) const fn rintk(x: f64) -> f64 {
    (if x < 0. { x - 0.5 } else { x + 0.5 }) as i64 as f64
}

/// Computes 2^n
#[inline(always)]
pub(crate) const fn pow2i(q: i32) -> f64 {
    f64::from_bits((q.wrapping_add(0x3ff) as u64) << 52)
}

/// Top 32 bits of `x` with the sign bit cleared: the `absxhi` word every
/// entry point tests against `0x7ff0_0000` to catch NaN/Inf before doing
/// any real work, and against the `XMAX_*` thresholds to pick a reduction
/// tier.
#[inline]
pub(crate) const fn abs_hi32(x: f64) -> u32 {
    ((x.to_bits() >> 32) as u32) & 0x7fff_ffff
}

/// Steps the bit pattern of a positive, finite `x` to its next-larger
/// representable double. Used by the directed-rounding small-x paths,
/// which return `x` itself or its single-ulp neighbor without going
/// through the reduction pipeline at all.
#[inline]
pub(crate) const fn next_bits_up(x: f64) -> f64 {
    f64::from_bits(x.to_bits().wrapping_add(1))
}

/// Steps the bit pattern of a positive, finite `x` to its next-smaller
/// representable double.
#[inline]
pub(crate) const fn next_bits_down(x: f64) -> f64 {
    f64::from_bits(x.to_bits().wrapping_sub(1))
}

/// One ulp toward `+infinity`, for `x` of either sign: the small-`x`
/// directed-rounding identities (`sin(x) == x` etc.) need the neighbor of
/// `x` in a *value* sense, not the neighbor of `x`'s bit pattern, and those
/// disagree once `x` is negative (incrementing a negative double's bit
/// pattern moves its magnitude, hence its value, further from zero).
#[inline]
pub(crate) const fn succ(x: f64) -> f64 {
    if x >= 0.0 {
        next_bits_up(x)
    } else {
        next_bits_down(x)
    }
}

/// One ulp toward `-infinity`, for `x` of either sign. See [`succ`].
#[inline]
pub(crate) const fn pred(x: f64) -> f64 {
    if x > 0.0 {
        next_bits_down(x)
    } else {
        next_bits_up(x)
    }
}
