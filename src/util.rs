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
use crate::err::{HaftError, try_vec};
use half::f16;
use num_complex::Complex;
use num_traits::Zero;

/// Coefficient pair `(cos, sin)` of the positive angle `2*pi*index/fft_len`.
///
/// Both directions read the same table; the forward path applies the
/// conjugate rotation on use.
pub(crate) fn compute_twiddle(index: usize, fft_len: usize) -> Complex<f16> {
    let angle = 2.0 * std::f64::consts::PI * index as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();
    Complex::new(f16::from_f64(v_cos), f16::from_f64(v_sin))
}

pub(crate) fn make_twiddle_table(fft_len: usize) -> Result<Vec<Complex<f16>>, HaftError> {
    let mut twiddles = try_vec![Complex::zero(); fft_len];
    for (i, w) in twiddles.iter_mut().enumerate() {
        *w = compute_twiddle(i, fft_len);
    }
    Ok(twiddles)
}
