/*
 * // Copyright (c) Radzivon Bartoshyk 7/2026. All rights reserved.
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
use crate::FftDirection;
use crate::radix4::radix4_butterfly;
use half::f16;
use num_complex::Complex;

/// Radix-4-by-2 combine stage bridging a length 2*4^k transform down to two
/// power-of-4 halves.
///
/// One butterfly pass splits the buffer into an averaged low half (the even
/// output bins) and a twiddle-rotated difference half (the odd bins), both at
/// half scale; the halves then run the radix-4 kernel against the shared
/// table at twiddle stride 2, and a final pass restores full scale.
pub(crate) fn radix4by2_forward(in_place: &mut [Complex<f16>], twiddles: &[Complex<f16>]) {
    let half_len = in_place.len() / 2;
    let one_half = f16::from_f32(0.5);

    let (lo, hi) = in_place.split_at_mut(half_len);
    for ((u, v), w) in lo.iter_mut().zip(hi.iter_mut()).zip(twiddles.iter()) {
        let xt = (u.re - v.re) * one_half;
        let yt = (u.im - v.im) * one_half;
        let sum = Complex {
            re: (u.re + v.re) * one_half,
            im: (v.im + u.im) * one_half,
        };
        *u = sum;
        *v = Complex {
            re: xt * w.re + yt * w.im,
            im: yt * w.re - xt * w.im,
        };
    }

    radix4_butterfly(lo, twiddles, 2, FftDirection::Forward);
    radix4_butterfly(hi, twiddles, 2, FftDirection::Forward);

    rescale(in_place);
}

/// Mirror of [`radix4by2_forward`]: the difference half rotates with the
/// inverse twiddle sense and the halves recurse in the inverse direction.
pub(crate) fn radix4by2_inverse(in_place: &mut [Complex<f16>], twiddles: &[Complex<f16>]) {
    let half_len = in_place.len() / 2;
    let one_half = f16::from_f32(0.5);

    let (lo, hi) = in_place.split_at_mut(half_len);
    for ((u, v), w) in lo.iter_mut().zip(hi.iter_mut()).zip(twiddles.iter()) {
        let xt = (u.re - v.re) * one_half;
        let yt = (u.im - v.im) * one_half;
        let sum = Complex {
            re: (u.re + v.re) * one_half,
            im: (v.im + u.im) * one_half,
        };
        *u = sum;
        *v = Complex {
            re: xt * w.re - yt * w.im,
            im: yt * w.re + xt * w.im,
        };
    }

    radix4_butterfly(lo, twiddles, 2, FftDirection::Inverse);
    radix4_butterfly(hi, twiddles, 2, FftDirection::Inverse);

    rescale(in_place);
}

// both halves carry a /2 from the combine stage; restore full scale, two
// complex samples (four scalars) per iteration
fn rescale(in_place: &mut [Complex<f16>]) {
    let two = f16::from_f32(2.0);
    for quad in in_place.chunks_exact_mut(2) {
        quad[0] = quad[0] * two;
        quad[1] = quad[1] * two;
    }
}
