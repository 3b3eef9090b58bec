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
use crate::err::HaftError;
use half::f16;
use num_complex::Complex;

/// Builds the swap-pair table for the bit-reversal permutation of `fft_len`
/// complex samples.
///
/// Entries keep the original coefficient-table encoding: each value is the
/// 16-bit-lane offset of a sample's real part premultiplied by four, and
/// entries are consumed in pairs. Binary reversal over log2(len) bits is an
/// involution, so the pairs are disjoint and applying the table twice is the
/// identity.
pub(crate) fn make_bit_rev_table(fft_len: usize) -> Result<Vec<u16>, HaftError> {
    debug_assert!(
        fft_len.is_power_of_two() && fft_len <= 4096,
        "swap offsets must stay within u16"
    );
    let bits = fft_len.trailing_zeros();

    let mut table = Vec::new();
    table
        .try_reserve_exact(fft_len)
        .map_err(|_| HaftError::OutOfMemory(fft_len))?;

    for i in 0..fft_len {
        let rev = i.reverse_bits() >> (usize::BITS - bits);
        if i < rev {
            table.push((i * 8) as u16);
            table.push((rev * 8) as u16);
        }
    }

    Ok(table)
}

/// Applies a swap-pair table over the buffer viewed as 16-bit elements.
///
/// Both lanes of each complex sample move together, so the interleaved
/// real/imaginary pairing is preserved.
pub(crate) fn bit_reverse_16(in_place: &mut [Complex<f16>], table: &[u16]) {
    for pair in table.chunks_exact(2) {
        let a = (pair[0] >> 2) as usize;
        let b = (pair[1] >> 2) as usize;
        in_place.swap(a >> 1, b >> 1);
    }
}
