use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("channel block width must be nonzero")]
    ZeroBlock,
    #[error("{dim} stride {stride} does not cover the {need} elements below it")]
    StrideTooSmall {
        dim: &'static str,
        stride: usize,
        need: usize,
    },
}

/// Layout descriptor for a 4-D tensor stored as `nChw{B}c`: logical shape
/// `(batch, channels, height, width)` with the channel dimension split into
/// `chan_blocks` groups of `block` contiguous values.
///
/// Strides are in elements. The column stride is always `block` — a full
/// channel block is contiguous per spatial coordinate, which is what makes
/// whole-block vector loads and stores possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedDesc {
    pub batch: usize,
    pub chan_blocks: usize,
    pub block: usize,
    pub height: usize,
    pub width: usize,
    row_stride: usize,
    chan_stride: usize,
    batch_stride: usize,
}

impl BlockedDesc {
    /// Dense descriptor: rows, channel blocks and batches packed back to back.
    pub fn packed(
        batch: usize,
        chan_blocks: usize,
        block: usize,
        height: usize,
        width: usize,
    ) -> Self {
        assert!(block >= 1, "channel block width must be nonzero");
        let row_stride = width * block;
        let chan_stride = height * row_stride;
        let batch_stride = chan_blocks * chan_stride;
        Self {
            batch,
            chan_blocks,
            block,
            height,
            width,
            row_stride,
            chan_stride,
            batch_stride,
        }
    }

    /// Descriptor with explicit strides, e.g. for padded rows. Each stride
    /// must cover the extent of the faster-varying dimensions so that no two
    /// coordinates alias.
    pub fn with_strides(
        batch: usize,
        chan_blocks: usize,
        block: usize,
        height: usize,
        width: usize,
        row_stride: usize,
        chan_stride: usize,
        batch_stride: usize,
    ) -> Result<Self, LayoutError> {
        if block == 0 {
            return Err(LayoutError::ZeroBlock);
        }
        if row_stride < width * block {
            return Err(LayoutError::StrideTooSmall {
                dim: "row",
                stride: row_stride,
                need: width * block,
            });
        }
        if chan_stride < height * row_stride {
            return Err(LayoutError::StrideTooSmall {
                dim: "channel-block",
                stride: chan_stride,
                need: height * row_stride,
            });
        }
        if batch_stride < chan_blocks * chan_stride {
            return Err(LayoutError::StrideTooSmall {
                dim: "batch",
                stride: batch_stride,
                need: chan_blocks * chan_stride,
            });
        }
        Ok(Self {
            batch,
            chan_blocks,
            block,
            height,
            width,
            row_stride,
            chan_stride,
            batch_stride,
        })
    }

    /// Element offset of the channel block at `(b, cb, y, x)`. The `block`
    /// elements starting there are contiguous. No bounds checks — callers
    /// keep coordinates in range.
    #[inline(always)]
    pub fn offset(&self, b: usize, cb: usize, y: usize, x: usize) -> usize {
        b * self.batch_stride + cb * self.chan_stride + y * self.row_stride + x * self.block
    }

    /// Minimum buffer length (in elements) this descriptor addresses.
    pub fn len(&self) -> usize {
        if self.batch == 0 || self.chan_blocks == 0 || self.height == 0 || self.width == 0 {
            return 0;
        }
        self.offset(self.batch - 1, self.chan_blocks - 1, self.height - 1, 0)
            + self.width * self.block
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the strides are exactly the dense ones, i.e. `offset`
    /// enumerates the buffer gaplessly in `(b, cb, y, x)` order.
    pub fn is_packed(&self) -> bool {
        self.row_stride == self.width * self.block
            && self.chan_stride == self.height * self.row_stride
            && self.batch_stride == self.chan_blocks * self.chan_stride
    }
}
