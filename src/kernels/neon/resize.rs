//! NEON bilinear block kernel (aarch64).

#[cfg(target_arch = "aarch64")]
use core::arch::aarch64::*;

/// 4-lane bilinear blend of one channel block. Same sub/mul/add order as the
/// scalar kernel, no fused multiply-add, so the rounding matches.
///
/// # Safety
/// Requires NEON. Every `corners[i] + out.len()` must be within `src`, and
/// `out.len()` must be a multiple of 4.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn lerp_block_neon(
    src: &[f32],
    corners: [usize; 4],
    x_lerp: f32,
    y_lerp: f32,
    out: &mut [f32],
) {
    let [tl, tr, bl, br] = corners;
    debug_assert!(out.len() % 4 == 0);
    debug_assert!(tl.max(tr).max(bl).max(br) + out.len() <= src.len());

    let w_lerp = vdupq_n_f32(x_lerp);
    let h_lerp = vdupq_n_f32(y_lerp);
    let sp = src.as_ptr();
    let op = out.as_mut_ptr();

    let mut k = 0;
    while k < out.len() {
        let top_left = vld1q_f32(sp.add(tl + k));
        let top_right = vld1q_f32(sp.add(tr + k));
        let bottom_left = vld1q_f32(sp.add(bl + k));
        let bottom_right = vld1q_f32(sp.add(br + k));

        let top = vsubq_f32(top_right, top_left);
        let top = vaddq_f32(top_left, vmulq_f32(top, w_lerp));

        let bottom = vsubq_f32(bottom_right, bottom_left);
        let bottom = vaddq_f32(bottom_left, vmulq_f32(bottom, w_lerp));

        let val = vsubq_f32(bottom, top);
        let val = vaddq_f32(top, vmulq_f32(val, h_lerp));

        vst1q_f32(op.add(k), val);
        k += 4;
    }
}
