//! Scroll state machine
//!
//! Owns the framebuffer for the length of one scroll. Each frame shows a
//! fixed window of matrix blocks, then the whole image moves one column
//! towards column 0. After `total_width` frames the text has left the
//! window and the machine is done. There is no wraparound.
//!
//! ```text
//!   Idle ──frame──▶ Scrolling ──frame × (total_width - 1)──▶ Done
//!     └──────────── empty text ─────────────────────────────▲
//! ```
//!
//! The machine never touches hardware. A driver reads [`Scroller::visible`],
//! writes it out, calls [`Scroller::advance`], then waits.

use crate::cascade::display_blocks;
use crate::raster::{rasterize, Framebuffer, RasterError};

/// Scroll states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollState {
    /// No frame emitted yet
    Idle,
    /// At least one frame emitted, more to go
    Scrolling,
    /// All frames emitted
    Done,
}

impl ScrollState {
    /// Check if this is the terminal state
    pub fn is_done(&self) -> bool {
        matches!(self, ScrollState::Done)
    }
}

/// One scroll through a string
#[derive(Debug, Clone)]
pub struct Scroller {
    framebuffer: Framebuffer,
    state: ScrollState,
    /// Frames to emit in total
    total_width: usize,
    /// Frames emitted so far
    frames: usize,
    /// Matrix blocks in the visible window
    display_blocks: usize,
}

impl Scroller {
    /// Rasterize `text` for scrolling on a cascade of `cascade_size` chips
    ///
    /// Text with no printable characters starts out [`ScrollState::Done`].
    pub fn new(text: &str, cascade_size: u8) -> Result<Self, RasterError> {
        let framebuffer = rasterize(text)?;
        let blocks = display_blocks(text, cascade_size);
        Ok(Self::from_framebuffer(framebuffer, blocks))
    }

    /// Scroll an already rasterized framebuffer through `display_blocks` blocks
    pub fn from_framebuffer(framebuffer: Framebuffer, display_blocks: usize) -> Self {
        let total_width = framebuffer.width();
        let state = if total_width == 0 {
            ScrollState::Done
        } else {
            ScrollState::Idle
        };

        Self {
            framebuffer,
            state,
            total_width,
            frames: 0,
            display_blocks,
        }
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Check if all frames have been emitted
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Total number of frames (the rendered text width in columns)
    #[inline]
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Frames emitted so far
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Frames left to emit
    #[inline]
    pub fn remaining(&self) -> usize {
        self.total_width - self.frames
    }

    /// Matrix blocks in the visible window
    #[inline]
    pub fn display_blocks(&self) -> usize {
        self.display_blocks
    }

    /// Framebuffer to show for the current frame, `None` once done
    pub fn visible(&self) -> Option<&Framebuffer> {
        if self.is_done() {
            None
        } else {
            Some(&self.framebuffer)
        }
    }

    /// Finish the current frame and move the image one column
    ///
    /// No-op once done.
    pub fn advance(&mut self) -> ScrollState {
        if self.is_done() {
            return self.state;
        }

        self.framebuffer.shift_columns();
        self.frames += 1;
        self.state = if self.frames >= self.total_width {
            ScrollState::Done
        } else {
            ScrollState::Scrolling
        };
        self.state
    }

    /// Release the framebuffer
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }
}
