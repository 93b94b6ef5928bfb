//! AVX2 and AVX-512 bilinear block kernels.
//!
//! Both blend a whole channel block per call, in lane-width chunks. The
//! operation order is sub, mul, add — deliberately no FMA — so the results
//! match the scalar kernel bit for bit.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// 8-lane bilinear blend of one channel block.
///
/// # Safety
/// Requires AVX2. Every `corners[i] + out.len()` must be within `src`, and
/// `out.len()` must be a multiple of 8.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn lerp_block_avx2(
    src: &[f32],
    corners: [usize; 4],
    x_lerp: f32,
    y_lerp: f32,
    out: &mut [f32],
) {
    let [tl, tr, bl, br] = corners;
    debug_assert!(out.len() % 8 == 0);
    debug_assert!(tl.max(tr).max(bl).max(br) + out.len() <= src.len());

    let w_lerp = _mm256_set1_ps(x_lerp);
    let h_lerp = _mm256_set1_ps(y_lerp);
    let sp = src.as_ptr();
    let op = out.as_mut_ptr();

    let mut k = 0;
    while k < out.len() {
        let top_left = _mm256_loadu_ps(sp.add(tl + k));
        let top_right = _mm256_loadu_ps(sp.add(tr + k));
        let bottom_left = _mm256_loadu_ps(sp.add(bl + k));
        let bottom_right = _mm256_loadu_ps(sp.add(br + k));

        let top = _mm256_sub_ps(top_right, top_left);
        let top = _mm256_add_ps(top_left, _mm256_mul_ps(top, w_lerp));

        let bottom = _mm256_sub_ps(bottom_right, bottom_left);
        let bottom = _mm256_add_ps(bottom_left, _mm256_mul_ps(bottom, w_lerp));

        let val = _mm256_sub_ps(bottom, top);
        let val = _mm256_add_ps(top, _mm256_mul_ps(val, h_lerp));

        _mm256_storeu_ps(op.add(k), val);
        k += 8;
    }
}

/// 16-lane bilinear blend of one channel block.
///
/// # Safety
/// Requires AVX-512F. Every `corners[i] + out.len()` must be within `src`,
/// and `out.len()` must be a multiple of 16.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
pub unsafe fn lerp_block_avx512(
    src: &[f32],
    corners: [usize; 4],
    x_lerp: f32,
    y_lerp: f32,
    out: &mut [f32],
) {
    let [tl, tr, bl, br] = corners;
    debug_assert!(out.len() % 16 == 0);
    debug_assert!(tl.max(tr).max(bl).max(br) + out.len() <= src.len());

    let w_lerp = _mm512_set1_ps(x_lerp);
    let h_lerp = _mm512_set1_ps(y_lerp);
    let sp = src.as_ptr();
    let op = out.as_mut_ptr();

    let mut k = 0;
    while k < out.len() {
        let top_left = _mm512_loadu_ps(sp.add(tl + k));
        let top_right = _mm512_loadu_ps(sp.add(tr + k));
        let bottom_left = _mm512_loadu_ps(sp.add(bl + k));
        let bottom_right = _mm512_loadu_ps(sp.add(br + k));

        let top = _mm512_sub_ps(top_right, top_left);
        let top = _mm512_add_ps(top_left, _mm512_mul_ps(top, w_lerp));

        let bottom = _mm512_sub_ps(bottom_right, bottom_left);
        let bottom = _mm512_add_ps(bottom_left, _mm512_mul_ps(bottom, w_lerp));

        let val = _mm512_sub_ps(bottom, top);
        let val = _mm512_add_ps(top, _mm512_mul_ps(val, h_lerp));

        _mm512_storeu_ps(op.add(k), val);
        k += 16;
    }
}
