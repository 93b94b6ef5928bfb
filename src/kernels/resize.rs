use rayon::prelude::*;

use crate::layout::BlockedDesc;

use super::weights::{interpolation_weights, scale_rate};

/// Instruction-set tag selecting one bilinear block-kernel specialization.
///
/// The variant is picked once per resize call; there is no per-iteration
/// dispatch. Picking a tag the running CPU does not support is a caller
/// error — use [`Isa::preferred`] when in doubt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    Scalar,
    Avx2,
    Avx512,
    Neon,
}

impl Isa {
    /// Vector width of the variant in f32 lanes.
    pub fn lanes(self) -> usize {
        match self {
            Isa::Scalar => 1,
            Isa::Neon => 4,
            Isa::Avx2 => 8,
            Isa::Avx512 => 16,
        }
    }

    /// Widest variant supported by the running CPU.
    pub fn preferred() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::arch::is_x86_feature_detected!("avx512f") {
                return Isa::Avx512;
            }
            if std::arch::is_x86_feature_detected!("avx2") {
                return Isa::Avx2;
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                return Isa::Neon;
            }
        }
        Isa::Scalar
    }
}

/// One block kernel: blend the four corner blocks at `corners` offsets into
/// `out`. Unsafe because the SIMD variants require their target feature.
type BlockFn = unsafe fn(&[f32], [usize; 4], f32, f32, &mut [f32]);

/// Scalar bilinear blend of one channel block: width-blend first, then
/// height-blend. The SIMD kernels replicate this exact operation order.
///
/// `corners` holds the offsets of the top-left, top-right, bottom-left and
/// bottom-right source blocks.
pub fn lerp_block(src: &[f32], corners: [usize; 4], x_lerp: f32, y_lerp: f32, out: &mut [f32]) {
    let [tl, tr, bl, br] = corners;
    for k in 0..out.len() {
        let top_left = src[tl + k];
        let top_right = src[tr + k];
        let bottom_left = src[bl + k];
        let bottom_right = src[br + k];

        let top = top_left + (top_right - top_left) * x_lerp;
        let bottom = bottom_left + (bottom_right - bottom_left) * x_lerp;
        out[k] = top + (bottom - top) * y_lerp;
    }
}

fn select_kernel(isa: Isa) -> BlockFn {
    match isa {
        Isa::Scalar => lerp_block as BlockFn,
        #[cfg(target_arch = "x86_64")]
        Isa::Avx2 => super::avx::lerp_block_avx2 as BlockFn,
        #[cfg(target_arch = "x86_64")]
        Isa::Avx512 => super::avx::lerp_block_avx512 as BlockFn,
        #[cfg(target_arch = "aarch64")]
        Isa::Neon => super::neon::lerp_block_neon as BlockFn,
        #[cfg(not(target_arch = "x86_64"))]
        Isa::Avx2 | Isa::Avx512 => panic!("{isa:?} kernel requires x86_64"),
        #[cfg(not(target_arch = "aarch64"))]
        Isa::Neon => panic!("neon kernel requires aarch64"),
    }
}

/// Parallel bilinear resize of a channel-blocked tensor.
///
/// Row and column weight tables are built once, then every
/// `(batch, channel-block, output-row)` slice of the destination is produced
/// independently under rayon. Each slice is a disjoint `&mut` chunk, the
/// source and the tables are read-only, so any work split yields the same
/// result with no synchronization.
///
/// `src` and `dst` are caller-owned; `dst` is fully overwritten. The source
/// descriptor may carry padded strides; the destination must be packed since
/// the parallel split follows the dense row order.
///
/// # Panics
/// On mismatched descriptors or buffer lengths, a non-packed destination, or
/// a block width not divisible by the lane count of `isa`.
pub fn resize_bilinear(
    src: &[f32],
    dst: &mut [f32],
    src_desc: &BlockedDesc,
    dst_desc: &BlockedDesc,
    isa: Isa,
) {
    assert_eq!(src_desc.batch, dst_desc.batch, "resize: batch mismatch");
    assert_eq!(
        src_desc.chan_blocks, dst_desc.chan_blocks,
        "resize: channel-block count mismatch"
    );
    assert_eq!(src_desc.block, dst_desc.block, "resize: block width mismatch");
    assert!(dst_desc.is_packed(), "resize: destination must be packed");
    assert!(src.len() >= src_desc.len(), "resize: source buffer too short");
    assert_eq!(dst.len(), dst_desc.len(), "resize: destination length mismatch");

    let block = dst_desc.block;
    assert!(
        block % isa.lanes() == 0,
        "resize: block width {} not divisible by the {} lanes of {:?}",
        block,
        isa.lanes(),
        isa
    );

    let (ih, iw) = (src_desc.height, src_desc.width);
    let (oh, ow) = (dst_desc.height, dst_desc.width);
    let chan_blocks = dst_desc.chan_blocks;

    let ys = interpolation_weights(ih, oh, scale_rate(ih, oh));
    let xs = interpolation_weights(iw, ow, scale_rate(iw, ow));

    let kernel = select_kernel(isa);

    // One chunk per (b, cb, oh) row of blocks; the packed destination makes
    // the chunk index decode a pure function of the dense row order.
    let row_len = ow * block;
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(n, row)| {
            let oh_idx = n % oh;
            let cb = (n / oh) % chan_blocks;
            let b = n / (oh * chan_blocks);

            let yw = ys[oh_idx];
            let top_base = src_desc.offset(b, cb, yw.lower, 0);
            let bottom_base = src_desc.offset(b, cb, yw.upper, 0);

            for (ow_idx, slot) in row.chunks_exact_mut(block).enumerate() {
                let xw = xs[ow_idx];
                let left = xw.lower * block;
                let right = xw.upper * block;
                let corners = [
                    top_base + left,
                    top_base + right,
                    bottom_base + left,
                    bottom_base + right,
                ];
                // SAFETY: the caller guarantees the CPU supports `isa`, which
                // is the selected kernel's only target-feature requirement.
                // Corner offsets stay within `src` by the weight-table
                // invariants and the stride validation in `BlockedDesc`.
                unsafe { kernel(src, corners, xw.lerp, yw.lerp, slot) };
            }
        });
}
