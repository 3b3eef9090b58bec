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
use half::f16;
use num_complex::Complex;

#[inline]
fn rotate_90(value: Complex<f16>, direction: FftDirection) -> Complex<f16> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

#[inline]
fn mul_twiddle(z: Complex<f16>, w: Complex<f16>, direction: FftDirection) -> Complex<f16> {
    match direction {
        FftDirection::Forward => Complex {
            re: z.re * w.re + z.im * w.im,
            im: z.im * w.re - z.re * w.im,
        },
        FftDirection::Inverse => Complex {
            re: z.re * w.re - z.im * w.im,
            im: z.im * w.re + z.re * w.im,
        },
    }
}

/// In-place decimation-in-frequency radix-4 stage cascade.
///
/// `in_place.len()` must be a power of four. The twiddle table is addressed
/// at `twiddle_stride` granularity, which quadruples at each stage; stride 1
/// covers a full-length transform, stride 2 a half-length transform sharing
/// the full-length table. Output is left in binary bit-reversed order and no
/// scaling is applied in either direction.
pub(crate) fn radix4_butterfly(
    in_place: &mut [Complex<f16>],
    twiddles: &[Complex<f16>],
    twiddle_stride: usize,
    direction: FftDirection,
) {
    let fft_len = in_place.len();
    debug_assert!(
        fft_len.is_power_of_two() && fft_len.trailing_zeros() % 2 == 0,
        "radix-4 kernel requires a power-of-4 length"
    );

    let mut n2 = fft_len;
    let mut tw = twiddle_stride;

    unsafe {
        while n2 > 1 {
            let n1 = n2;
            n2 >>= 2;

            let mut ia = 0usize;
            for j in 0..n2 {
                let w1 = *twiddles.get_unchecked(ia);
                let w2 = *twiddles.get_unchecked(ia * 2);
                let w3 = *twiddles.get_unchecked(ia * 3);
                ia += tw;

                let mut i0 = j;
                while i0 < fft_len {
                    let i1 = i0 + n2;
                    let i2 = i1 + n2;
                    let i3 = i2 + n2;

                    let a = *in_place.get_unchecked(i0);
                    let b = *in_place.get_unchecked(i1);
                    let c = *in_place.get_unchecked(i2);
                    let d = *in_place.get_unchecked(i3);

                    let t0 = a + c;
                    let t1 = a - c;
                    let t2 = b + d;
                    let t3 = rotate_90(b - d, direction);

                    // radix-4 butterfly; the two middle outputs swap slots so
                    // the final scramble stays a plain bit reversal
                    *in_place.get_unchecked_mut(i0) = t0 + t2;
                    *in_place.get_unchecked_mut(i1) = mul_twiddle(t0 - t2, w2, direction);
                    *in_place.get_unchecked_mut(i2) = mul_twiddle(t1 + t3, w1, direction);
                    *in_place.get_unchecked_mut(i3) = mul_twiddle(t1 - t3, w3, direction);

                    i0 += n1;
                }
            }

            tw <<= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::make_twiddle_table;

    #[test]
    fn test_radix4_impulse() {
        for i in 2..5 {
            let size = 4usize.pow(i);
            let twiddles = make_twiddle_table(size).unwrap();
            let mut input = vec![Complex::<f16>::default(); size];
            input[0] = Complex::new(f16::from_f32(1.0), f16::from_f32(0.0));

            radix4_butterfly(&mut input, &twiddles, 1, FftDirection::Forward);

            for (idx, z) in input.iter().enumerate() {
                assert!(
                    (z.re.to_f32() - 1.0).abs() < 1e-3 && z.im.to_f32().abs() < 1e-3,
                    "flat spectrum expected, got ({}, {}) at {} for size {}",
                    z.re,
                    z.im,
                    idx,
                    size
                );
            }
        }
    }

    #[test]
    fn test_radix4_dc_concentrates_in_slot_zero() {
        let size = 64;
        let twiddles = make_twiddle_table(size).unwrap();
        let mut input =
            vec![Complex::new(f16::from_f32(0.25), f16::from_f32(0.0)); size];

        radix4_butterfly(&mut input, &twiddles, 1, FftDirection::Forward);

        assert!(
            (input[0].re.to_f32() - 16.0).abs() < 1e-2,
            "DC bin expected 16, got {}",
            input[0].re
        );
        for (idx, z) in input.iter().enumerate().skip(1) {
            assert!(
                z.re.to_f32().abs() < 1e-2 && z.im.to_f32().abs() < 1e-2,
                "expected zero at {}, got ({}, {})",
                idx,
                z.re,
                z.im
            );
        }
    }

    #[test]
    fn test_radix4_tone_lands_bit_reversed() {
        // bin 1 of a length-16 transform must land in raw slot 8
        let size = 16;
        let twiddles = make_twiddle_table(size).unwrap();
        let mut input = vec![Complex::<f16>::default(); size];
        for (n, z) in input.iter_mut().enumerate() {
            let angle = 2.0 * std::f64::consts::PI * n as f64 / size as f64;
            *z = Complex::new(f16::from_f64(angle.cos()), f16::from_f64(angle.sin()));
        }

        radix4_butterfly(&mut input, &twiddles, 1, FftDirection::Forward);

        for (idx, z) in input.iter().enumerate() {
            let (expected_re, tol) = if idx == 8 { (16.0, 0.25) } else { (0.0, 0.25) };
            assert!(
                (z.re.to_f32() - expected_re).abs() < tol && z.im.to_f32().abs() < tol,
                "unexpected ({}, {}) at raw slot {}",
                z.re,
                z.im,
                idx
            );
        }
    }
}
