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
//! Threshold and rounding-test constants for the trig fast path.
//!
//! Unlike the sin/cos table and the polynomial coefficients (ported
//! bit-for-bit from the offline Sollya/mpmath generation, see
//! `tables.rs`), the `XMAX_*`, `EPS_*` and `RN_CST_*` values here are
//! re-derived rather than ported from a certified source: the original
//! crlibm proof artifacts (Gappa scripts) are not part of this port. Each
//! is chosen conservatively — biased toward more fallback calls to the
//! slow path rather than toward accepting a fast-path result that might
//! round incorrectly. See DESIGN.md for the reasoning and for which
//! values are a direct transcription of the literal bounds stated in the
//! specification (the `2^-27` small-argument identities) versus an
//! estimate (the `EPS_*`/`RN_CST_*` rounding-test margins).
use crate::math::common::{next_bits_down, pow2i};

/// Below this |x|, Cody-Waite reduction with 2 constants is exact enough
/// (up to the final multiply). Roughly `2^45`.
pub(crate) const XMAX_CW2: f64 = pow2i(45);

/// Below this |x|, the double-double reduction regime (3-piece pi/256
/// split, exact `two_prod`s) is accurate enough. Roughly `2^79`.
pub(crate) const XMAX_DDRR: f64 = pow2i(79);

/// Below this |x|, `sin(x) == x` and `tan(x) == x` to within correct
/// rounding (testable property 5 in the specification), and `cos(x) ==
/// 1`.
pub(crate) const XMAX_RETURN_X_FOR_SIN: f64 = pow2i(-27);
pub(crate) const XMAX_RETURN_X_FOR_TAN: f64 = pow2i(-27);
pub(crate) const XMAX_RETURN_1_FOR_COS: f64 = pow2i(-27);

/// Below this |x| (and above the return-x/return-1 thresholds above), the
/// small-residue polynomial can be evaluated directly on `x` with no range
/// reduction at all.
///
/// `eval_sincos_zero` truncates `sin(y)/y - 1` and `cos(y) - 1` after the
/// `y^6` term (coefficients `S3/S5/S7`, `C2/C4/C6`), so the first dropped
/// term is `y^8` (sine series) / `y^8` (cosine series), with coefficients
/// `1/9! = 1/362880` and `1/8! = 1/40320` respectively. At the old
/// `2^-3` boundary that truncation error is ~2.76e-15 absolute at `x=0.1`
/// (~198 ulps of `ulp(sin 0.1)`), which the directed rounding test cannot
/// see (it only bounds the dd-arithmetic tail captured in `rl`, not the
/// series truncation itself) — a correctness bug, not a performance
/// choice. Shrinking the boundary to `2^-7` brings the relative
/// truncation error down to `(2^-7)^8 / 362880 ~= 2^-74.5` for sine and
/// `(2^-7)^8 / 40320 ~= 2^-71` for cosine, both far below half an ulp
/// (`2^-53` relative), so the table-free tier is sound again. Tangent's
/// own case-2 polynomial (`eval_tan_fast`/`eval_tan_small`, truncated
/// after the `y^15` term) was never the source of this bug — its next
/// dropped term is `y^17`, negligible even at `2^-3` — but it is lowered
/// to the same `2^-7` boundary for uniformity with sin/cos rather than
/// carrying a function-specific exception.
pub(crate) const XMAX_SIN_CASE2: f64 = pow2i(-7);
pub(crate) const XMAX_COS_CASE2: f64 = pow2i(-7);
pub(crate) const XMAX_TAN_CASE2: f64 = pow2i(-7);

/// Rounding-test multiplier for the round-to-nearest test, case 2 (no
/// table, small-residue polynomial only). `rh == rn(rh + rl*RN_CST)`.
///
/// This must be a value of order 1 (`1 + small`), not a large power of
/// two: `rl` is already the dd-arithmetic tail of a pair satisfying the
/// `|lo| <= ulp(hi)/2` invariant (the last step of every reconstruction
/// here is an exact `two_sum`), so scaling it by anything past roughly
/// `1 + 2^-20` makes `rh + rl*RN_CST` overflow into `rh`'s neighbor for
/// virtually every input, and the test can never certify — which is
/// exactly what a multiplier of `2^31` did: it made the round-to-nearest
/// fast path dead code, with every `sin_rn`/`cos_rn`/`tan_rn` call
/// deferring to the second step. The small margin above `1` accounts for
/// the residual arithmetic-rounding error in computing `(rh, rl)` itself
/// (a handful of ulps at most, now that `XMAX_*_CASE2` above keeps the
/// series truncation error many orders of magnitude smaller still).
pub(crate) const RN_CST_SIN_CASE2: f64 = 1.0 + pow2i(-20);
pub(crate) const RN_CST_COS_CASE2: f64 = 1.0 + pow2i(-20);

/// Rounding-test multiplier, case 3 (full reduction + table
/// reconstruction). The reconstructed (rh, rl) pair is accurate to close
/// to double-double precision, so the margin above `1` can be tighter
/// than case 2's (see that constant's doc comment for why it must be
/// order 1 at all).
pub(crate) const RN_CST_SIN_CASE3: f64 = 1.0 + pow2i(-40);
pub(crate) const RN_CST_COS_CASE3: f64 = 1.0 + pow2i(-40);

/// Tangent has three rounding-test tiers: a fast Taylor evaluation
/// (CASE22), a refined double-double Taylor evaluation tried only if
/// CASE22 fails (CASE21), and the post-reduction table path (CASE3). Each
/// margin above `1` shrinks with the accuracy of the tier it guards, for
/// the same reason given on `RN_CST_SIN_CASE2`.
pub(crate) const RN_CST_TAN_CASE22: f64 = 1.0 + pow2i(-20);
pub(crate) const RN_CST_TAN_CASE21: f64 = 1.0 + pow2i(-30);
pub(crate) const RN_CST_TAN_CASE3: f64 = 1.0 + pow2i(-40);

/// Directed-rounding epsilon bounds: `|rl| > EPS * u53` certifies the
/// sign of `rl` determines the binary64 neighbor of `rh`. One pair
/// (case2/case3) per function, matching the two accuracy regimes above.
///
/// `round_directed` derives `u53 = 2^53 * ulp(rh)` from `rh`'s exponent
/// field, so the threshold `EPS * u53`, expressed relative to `rh`, is
/// `~= 2 * EPS` (since `ulp(rh) ~= rh * 2^-52`). For this test to be
/// sound the threshold must clear whatever error the candidate `(rh,
/// rl)` carries that isn't already reflected in `rl`'s own sign — chiefly
/// the series truncation error bounded above for `XMAX_SIN_CASE2`/
/// `XMAX_COS_CASE2`:
/// - sine, case 2: truncation ~= `2^-74.5` relative, so `EPS` need only
///   clear `~2^-75.5`; `EPS_SIN_CASE2 = 2^-60` clears it with roughly
///   `2^15` of margin to spare.
/// - cosine, case 2: truncation ~= `2^-71` relative, needs `EPS` to clear
///   `~2^-72`; `EPS_COS_CASE2 = 2^-58` clears it with similar margin.
/// - case 3 (post-reduction, table-backed): the dd kernel's own
///   documented relative-error bounds (`dd_add` <= `2^-103`, `dd_mul` <=
///   `2^-102`) dominate, many orders of magnitude below `2^-90`-ish
///   margins chosen here — this tier was already conservative before
///   this pass and needs no change, only this derivation written down.
/// - tangent's two no-table tiers truncate the `T3..T15` series after
///   `y^15`; the next term (`y^17`) is negligible even at the old `2^-3`
///   boundary, so `EPS_TAN_CASE22`/`EPS_TAN_CASE21` were never the bug
///   and stay as-is, now with even more margin under the shrunk
///   `XMAX_TAN_CASE2`.
pub(crate) const EPS_SIN_CASE2: f64 = pow2i(-60);
pub(crate) const EPS_SIN_CASE3: f64 = pow2i(-95);
pub(crate) const EPS_COS_CASE2: f64 = pow2i(-58);
pub(crate) const EPS_COS_CASE3: f64 = pow2i(-93);
pub(crate) const EPS_TAN_CASE22: f64 = pow2i(-55);
pub(crate) const EPS_TAN_CASE21: f64 = pow2i(-65);
pub(crate) const EPS_TAN_CASE3: f64 = pow2i(-90);

/// `1.0`'s downward neighbor: the exact result for `cos(x)` directed
/// toward `-infinity`/zero whenever `0 < |x| < XMAX_RETURN_1_FOR_COS`
/// (`cos(x) < 1` strictly, but rounds to `1` at binary64 precision in the
/// other two modes). `x == 0` is exact and handled separately.
pub(crate) const ONE_ROUNDED_DOWN: f64 = next_bits_down(1.0);
