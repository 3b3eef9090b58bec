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
mod bitrev;
mod err;
mod radix4;
mod radix4x2;
mod util;

pub use err::HaftError;

use crate::bitrev::{bit_reverse_16, make_bit_rev_table};
use crate::radix4::radix4_butterfly;
use crate::radix4x2::{radix4by2_forward, radix4by2_inverse};
use crate::util::make_twiddle_table;
use half::f16;
use num_complex::Complex;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Radix {
    Radix4,
    Radix4By2,
}

// adding a length is a data change, not a control-flow change
const SUPPORTED_LENGTHS: &[(usize, Radix)] = &[
    (16, Radix::Radix4),
    (32, Radix::Radix4By2),
    (64, Radix::Radix4),
    (128, Radix::Radix4By2),
    (256, Radix::Radix4),
    (512, Radix::Radix4By2),
    (1024, Radix::Radix4),
    (2048, Radix::Radix4By2),
    (4096, Radix::Radix4),
];

fn radix_for_length(n: usize) -> Option<Radix> {
    SUPPORTED_LENGTHS
        .iter()
        .find(|&&(len, _)| len == n)
        .map(|&(_, radix)| radix)
}

/// Precomputed plan for one half-precision complex FFT length.
///
/// Lengths 16, 64, 256, 1024 and 4096 run the pure radix-4 kernel; 32, 128,
/// 512 and 2048 go through the radix-4-by-2 combine stage. The plan owns its
/// twiddle and bit-reversal tables and is immutable after construction, so
/// it can be shared across threads as long as every call gets an exclusive
/// buffer.
pub struct CfftF16 {
    execution_length: usize,
    radix: Radix,
    twiddles: Vec<Complex<f16>>,
    bit_rev_table: Vec<u16>,
}

impl CfftF16 {
    pub fn new(size: usize) -> Result<CfftF16, HaftError> {
        let radix = radix_for_length(size).ok_or(HaftError::UnsupportedLength(size))?;
        Ok(CfftF16 {
            execution_length: size,
            radix,
            twiddles: make_twiddle_table(size)?,
            bit_rev_table: make_bit_rev_table(size)?,
        })
    }

    /// Transforms `in_place` in the given direction, unnormalized both ways.
    ///
    /// The kernels leave the spectrum in bit-reversed order; pass
    /// `bit_reverse = true` for natural ordering. A forward/inverse round
    /// trip needs the permutation applied on both calls and scales the
    /// signal by the transform length.
    pub fn execute(
        &self,
        in_place: &mut [Complex<f16>],
        direction: FftDirection,
        bit_reverse: bool,
    ) -> Result<(), HaftError> {
        if in_place.len() != self.execution_length {
            return Err(HaftError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }

        match (self.radix, direction) {
            (Radix::Radix4, _) => radix4_butterfly(in_place, &self.twiddles, 1, direction),
            (Radix::Radix4By2, FftDirection::Forward) => {
                radix4by2_forward(in_place, &self.twiddles)
            }
            (Radix::Radix4By2, FftDirection::Inverse) => {
                radix4by2_inverse(in_place, &self.twiddles)
            }
        }

        if bit_reverse {
            bit_reverse_16(in_place, &self.bit_rev_table);
        }

        Ok(())
    }

    pub fn length(&self) -> usize {
        self.execution_length
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_round_trip_all_supported_lengths() {
        for &(size, _) in SUPPORTED_LENGTHS {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let src: Vec<Complex<f16>> = (0..size)
                .map(|_| {
                    Complex::new(
                        f16::from_f32(rng.random::<f32>()),
                        f16::from_f32(rng.random::<f32>()),
                    )
                })
                .collect();

            let fft = CfftF16::new(size).unwrap();
            let mut buffer = src.clone();
            fft.execute(&mut buffer, FftDirection::Forward, true).unwrap();
            fft.execute(&mut buffer, FftDirection::Inverse, true).unwrap();

            let scale = 1.0 / size as f64;
            buffer.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re.to_f64() * scale - b.re.to_f64()).abs() < 3e-2,
                    "a_re {} != b_re {} for size {}",
                    a.re,
                    b.re,
                    size
                );
                assert!(
                    (a.im.to_f64() * scale - b.im.to_f64()).abs() < 3e-2,
                    "a_im {} != b_im {} for size {}",
                    a.im,
                    b.im,
                    size
                );
            });
        }
    }

    #[test]
    fn test_scale_consistency_across_paths() {
        // a pure tone must keep the same normalized magnitude whether the
        // length routes through the pure radix-4 path or the combine stage
        let bin = 5usize;
        let mut magnitudes = Vec::new();
        for size in [1024usize, 2048] {
            let mut buffer: Vec<Complex<f16>> = (0..size)
                .map(|n| {
                    let angle = 2.0 * std::f64::consts::PI * (bin * n % size) as f64 / size as f64;
                    Complex::new(f16::from_f64(angle.cos()), f16::from_f64(angle.sin()))
                })
                .collect();

            let fft = CfftF16::new(size).unwrap();
            fft.execute(&mut buffer, FftDirection::Forward, true).unwrap();

            let magnitude =
                (buffer[bin].re.to_f64().powi(2) + buffer[bin].im.to_f64().powi(2)).sqrt();
            magnitudes.push(magnitude / size as f64);
        }

        assert!(
            (magnitudes[0] - 1.0).abs() < 3e-2 && (magnitudes[1] - 1.0).abs() < 3e-2,
            "normalized tone magnitudes {:?} should be close to 1",
            magnitudes
        );
        assert!(
            (magnitudes[0] - magnitudes[1]).abs() < 3e-2,
            "paths disagree on tone magnitude: {:?}",
            magnitudes
        );
    }

    #[test]
    fn test_unsupported_length_is_rejected() {
        for size in [0usize, 1, 2, 4, 8, 48, 100, 8192] {
            let result = CfftF16::new(size);
            assert!(
                matches!(result, Err(HaftError::UnsupportedLength(n)) if n == size),
                "length {} must be rejected",
                size
            );
        }
    }

    #[test]
    fn test_wrong_buffer_length_is_rejected() {
        let fft = CfftF16::new(32).unwrap();
        let mut buffer = vec![Complex::<f16>::default(); 16];
        let result = fft.execute(&mut buffer, FftDirection::Forward, true);
        assert!(matches!(
            result,
            Err(HaftError::InvalidInPlaceLength(32, 16))
        ));
        assert_eq!(fft.length(), 32);
    }
}
