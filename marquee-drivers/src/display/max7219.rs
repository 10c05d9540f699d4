//! MAX7219/MAX7221 LED driver cascade
//!
//! Each chip drives an 8x8 dot matrix (or 8 seven-segment digits) through
//! 8 row registers. Chips are daisy-chained on one data line; a register
//! write reaches one chip, or all of them, through a [`RegisterWrite`]
//! connector.
//!
//! # Rendering
//!
//! Text is rasterized with the 5x7 font into a [`Framebuffer`] and sent one
//! matrix block at a time, block by block and row by row. Block 0 (the left
//! edge of the text) goes to the last chip slot in the chain.
//!
//! Scrolling re-sends the same window of blocks once per column of text
//! width, moving the image one column to the left between frames. The
//! caller's thread is blocked for the frame delay; use
//! [`Max7219::scroll_text_async`] under an async executor, or drive
//! [`Max7219::scroll_step`] directly to interleave other work or cancel.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use marquee_core::cascade::{self, Target, MATRIX_WIDTH};
use marquee_core::config::{CascadeConfig, ConfigError, MAX_BRIGHTNESS};
use marquee_core::raster::{rasterize, Framebuffer, RasterError};
use marquee_core::scroll::{ScrollState, Scroller};
use marquee_core::traits::RegisterWrite;

/// MAX7219 register addresses
pub mod reg {
    /// No-op (fills frame slots of chips not addressed)
    pub const NOOP: u8 = 0x00;
    /// Digit/row 0; rows 1-7 follow at consecutive addresses
    pub const DIGIT_0: u8 = marquee_core::cascade::DIGIT_0;
    /// BCD decode mode per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// Brightness (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// Light all segments
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Blank digit value in BCD decode mode
const BLANK_BCD: u8 = 0x0F;

/// Blank row value without decoding
const BLANK: u8 = 0x00;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Parameter out of range (cascade size, digit, brightness)
    InvalidArgument,
    /// Text does not fit the framebuffer
    OutOfMemory,
    /// Register write failed
    Transport(E),
}

impl<E> From<RasterError> for Error<E> {
    fn from(err: RasterError) -> Self {
        match err {
            RasterError::OutOfMemory => Error::OutOfMemory,
        }
    }
}

impl<E> From<ConfigError> for Error<E> {
    fn from(_: ConfigError) -> Self {
        Error::InvalidArgument
    }
}

/// A cascade of MAX7219 chips
pub struct Max7219<W> {
    writer: W,
    cascade_size: u8,
    /// Digits in use across the cascade
    digits: u8,
    mirrored: bool,
    /// BCD decode mode enabled
    bcd: bool,
    brightness: u8,
    shutdown: bool,
}

impl<W: RegisterWrite> Max7219<W> {
    /// Create a driver for the cascade described by `config`
    ///
    /// No registers are written; call [`Max7219::init`] before use.
    pub fn new(writer: W, config: CascadeConfig) -> Result<Self, Error<W::Error>> {
        let digits = match config.validate() {
            Ok(digits) => digits,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Invalid cascade config: {} chips, {} digits ({})",
                    config.cascade_size,
                    config.digits,
                    e
                );
                return Err(e.into());
            }
        };

        Ok(Self {
            writer,
            cascade_size: config.cascade_size,
            digits,
            mirrored: config.mirrored,
            bcd: false,
            brightness: 0,
            shutdown: true,
        })
    }

    /// Number of chips in the cascade
    pub fn cascade_size(&self) -> u8 {
        self.cascade_size
    }

    /// Digits in use across the cascade
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Whether digits are numbered from the far end
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Whether BCD decode mode is enabled
    pub fn is_bcd(&self) -> bool {
        self.bcd
    }

    /// Last brightness written
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Whether the chips are shut down
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }

    /// Borrow the register writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the register writer
    pub fn release(self) -> W {
        self.writer
    }

    fn send(&mut self, target: Target, register: u8, value: u8) -> Result<(), Error<W::Error>> {
        self.writer
            .write_register(target, register, value)
            .map_err(Error::Transport)
    }

    /// Bring every chip into a known state
    ///
    /// Shut down, display test off, all 8 rows scanned, decode mode off
    /// (which clears the display), minimum brightness, then wake up.
    pub fn init(&mut self) -> Result<(), Error<W::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "MAX7219 init: {} chips, {} digits",
            self.cascade_size,
            self.digits
        );

        self.set_shutdown(true)?;
        self.send(Target::Broadcast, reg::DISPLAY_TEST, 0)?;
        self.send(Target::Broadcast, reg::SCAN_LIMIT, MATRIX_WIDTH as u8 - 1)?;
        self.set_decode_mode(false)?;
        self.set_brightness(0)?;
        self.set_shutdown(false)
    }

    /// Enable or disable BCD decoding on every digit, then clear
    pub fn set_decode_mode(&mut self, bcd: bool) -> Result<(), Error<W::Error>> {
        self.bcd = bcd;
        self.send(
            Target::Broadcast,
            reg::DECODE_MODE,
            if bcd { 0xFF } else { 0x00 },
        )?;
        self.clear()
    }

    /// Set brightness on every chip (0-15)
    pub fn set_brightness(&mut self, value: u8) -> Result<(), Error<W::Error>> {
        if value > MAX_BRIGHTNESS {
            #[cfg(feature = "defmt")]
            defmt::warn!("Invalid brightness: {}", value);
            return Err(Error::InvalidArgument);
        }

        self.send(Target::Broadcast, reg::INTENSITY, value)?;
        self.brightness = value;
        Ok(())
    }

    /// Shut down or wake up every chip
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Error<W::Error>> {
        self.send(Target::Broadcast, reg::SHUTDOWN, u8::from(!shutdown))?;
        self.shutdown = shutdown;
        Ok(())
    }

    /// Blank every row of every chip
    pub fn clear(&mut self) -> Result<(), Error<W::Error>> {
        let blank = if self.bcd { BLANK_BCD } else { BLANK };
        for row in 0..MATRIX_WIDTH as u8 {
            self.send(Target::Broadcast, reg::DIGIT_0 + row, blank)?;
        }
        Ok(())
    }

    /// Write a raw value to one digit
    pub fn set_digit(&mut self, digit: u8, value: u8) -> Result<(), Error<W::Error>> {
        let Some(loc) = cascade::locate_digit(digit, self.digits, self.mirrored) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Invalid digit: {}", digit);
            return Err(Error::InvalidArgument);
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("Chip {}, register {} val {=u8:#x}", loc.chip, loc.register, value);

        self.send(loc.target(), loc.register, value)
    }

    /// Draw 8 raw row bytes starting at digit `pos`
    ///
    /// Bypasses the font. Rows past the last digit are dropped silently.
    pub fn draw_image_8x8(&mut self, pos: u8, image: &[u8; 8]) -> Result<(), Error<W::Error>> {
        for (digit, &row) in (pos..self.digits).zip(image.iter()) {
            self.set_digit(digit, row)?;
        }
        Ok(())
    }

    /// Send the first `blocks` matrix blocks of `framebuffer`
    ///
    /// `blocks` is capped at the cascade length. Blocks are sent in
    /// order, each row 0 to 7. The display is not cleared first.
    pub fn render_framebuffer(
        &mut self,
        framebuffer: &Framebuffer,
        blocks: usize,
    ) -> Result<(), Error<W::Error>> {
        let blocks = blocks.min(self.cascade_size as usize);
        for matrix in 0..blocks {
            for row in 0..MATRIX_WIDTH as u8 {
                let loc = cascade::locate_matrix(matrix, row, self.cascade_size)
                    .ok_or(Error::InvalidArgument)?;
                self.send(loc.target(), loc.register, framebuffer.block(matrix, row))?;
            }
        }
        Ok(())
    }

    /// Clear the display and show `text` without scrolling
    ///
    /// One block is sent per character of `text`, up to the cascade length.
    /// Text is rasterized before anything is written, so an
    /// [`Error::OutOfMemory`] leaves the display untouched.
    pub fn print_static(&mut self, text: &str) -> Result<(), Error<W::Error>> {
        let framebuffer = rasterize(text)?;
        self.clear()?;
        self.render_framebuffer(&framebuffer, cascade::display_blocks(text, self.cascade_size))
    }

    /// Rasterize `text` and prepare the display for scrolling it
    ///
    /// Clears the display unless there is nothing to scroll. Feed the
    /// returned [`Scroller`] to [`Max7219::scroll_step`].
    pub fn start_scroll(&mut self, text: &str) -> Result<Scroller, Error<W::Error>> {
        let scroller = Scroller::new(text, self.cascade_size)?;
        if !scroller.is_done() {
            self.clear()?;
        }
        Ok(scroller)
    }

    /// Emit one scroll frame and move the image one column
    ///
    /// Does not wait. Returns the state after the frame; once
    /// [`ScrollState::Done`] further calls write nothing.
    pub fn scroll_step(&mut self, scroller: &mut Scroller) -> Result<ScrollState, Error<W::Error>> {
        let Some(framebuffer) = scroller.visible() else {
            return Ok(ScrollState::Done);
        };

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Scroll frame {}/{}, {} left",
            scroller.frames() + 1,
            scroller.total_width(),
            scroller.remaining()
        );

        self.render_framebuffer(framebuffer, scroller.display_blocks())?;
        Ok(scroller.advance())
    }

    /// Scroll `text` across the display once, right to left
    ///
    /// Emits one frame per column of text width, each followed by a
    /// `frame_delay_ms` delay. Empty text writes nothing. A write error
    /// aborts the remaining frames.
    pub fn scroll_text<D: DelayNs>(
        &mut self,
        text: &str,
        delay: &mut D,
        frame_delay_ms: u32,
    ) -> Result<(), Error<W::Error>> {
        let mut scroller = self.start_scroll(text)?;
        while !scroller.is_done() {
            self.scroll_step(&mut scroller)?;
            delay.delay_ms(frame_delay_ms);
        }
        Ok(())
    }

    /// [`Max7219::scroll_text`] with an async delay between frames
    pub async fn scroll_text_async<D: AsyncDelayNs>(
        &mut self,
        text: &str,
        delay: &mut D,
        frame_delay_ms: u32,
    ) -> Result<(), Error<W::Error>> {
        let mut scroller = self.start_scroll(text)?;
        while !scroller.is_done() {
            self.scroll_step(&mut scroller)?;
            delay.delay_ms(frame_delay_ms).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Write {
        target: Target,
        register: u8,
        value: u8,
    }

    fn w(target: Target, register: u8, value: u8) -> Write {
        Write {
            target,
            register,
            value,
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusError;

    /// Records every register write; optionally fails after `fail_after` writes
    struct MockBus {
        writes: Vec<Write, 1024>,
        fail_after: Option<usize>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_after: None,
            }
        }

        fn failing_after(n: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_after: Some(n),
            }
        }
    }

    impl RegisterWrite for MockBus {
        type Error = BusError;

        fn write_register(
            &mut self,
            target: Target,
            register: u8,
            value: u8,
        ) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
                return Err(BusError);
            }
            self.writes
                .push(w(target, register, value))
                .map_err(|_| BusError)
        }
    }

    /// Counts delay calls
    #[derive(Default)]
    struct CountingDelay {
        calls: usize,
        total_ms: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.calls += 1;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.total_ms += ms;
        }
    }

    impl AsyncDelayNs for CountingDelay {
        async fn delay_ns(&mut self, _ns: u32) {
            self.calls += 1;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.total_ms += ms;
        }
    }

    fn driver(cascade_size: u8) -> Max7219<MockBus> {
        Max7219::new(MockBus::new(), CascadeConfig::new(cascade_size)).unwrap()
    }

    fn clear_writes(blank: u8) -> [Write; 8] {
        core::array::from_fn(|i| w(Target::Broadcast, reg::DIGIT_0 + i as u8, blank))
    }

    #[test]
    fn test_new_validates_config() {
        assert!(matches!(
            Max7219::new(MockBus::new(), CascadeConfig::new(0)),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            Max7219::new(MockBus::new(), CascadeConfig::new(9)),
            Err(Error::InvalidArgument)
        ));

        let config = CascadeConfig {
            cascade_size: 2,
            digits: 17,
            mirrored: false,
        };
        assert!(matches!(
            Max7219::new(MockBus::new(), config),
            Err(Error::InvalidArgument)
        ));

        let dev = driver(4);
        assert_eq!(dev.cascade_size(), 4);
        assert_eq!(dev.digits(), 32);
        assert!(dev.writer().writes.is_empty());
    }

    #[test]
    fn test_init_sequence() {
        let mut dev = driver(2);
        dev.init().unwrap();

        let mut expected: Vec<Write, 16> = Vec::new();
        expected.push(w(Target::Broadcast, reg::SHUTDOWN, 0)).unwrap();
        expected.push(w(Target::Broadcast, reg::DISPLAY_TEST, 0)).unwrap();
        expected.push(w(Target::Broadcast, reg::SCAN_LIMIT, 7)).unwrap();
        expected.push(w(Target::Broadcast, reg::DECODE_MODE, 0)).unwrap();
        expected.extend_from_slice(&clear_writes(0)).unwrap();
        expected.push(w(Target::Broadcast, reg::INTENSITY, 0)).unwrap();
        expected.push(w(Target::Broadcast, reg::SHUTDOWN, 1)).unwrap();

        assert_eq!(dev.writer().writes.as_slice(), expected.as_slice());
        assert!(!dev.is_shutdown());
        assert!(!dev.is_bcd());
        assert_eq!(dev.brightness(), 0);
    }

    #[test]
    fn test_decode_mode_changes_blank_value() {
        let mut dev = driver(1);
        dev.set_decode_mode(true).unwrap();

        let writes = &dev.writer().writes;
        assert_eq!(writes[0], w(Target::Broadcast, reg::DECODE_MODE, 0xFF));
        assert_eq!(&writes[1..], &clear_writes(BLANK_BCD));
        assert!(dev.is_bcd());
    }

    #[test]
    fn test_brightness_range() {
        let mut dev = driver(1);
        dev.set_brightness(15).unwrap();
        assert_eq!(dev.brightness(), 15);

        assert_eq!(dev.set_brightness(16), Err(Error::InvalidArgument));
        assert_eq!(dev.brightness(), 15);
        // Rejected before any I/O
        assert_eq!(dev.writer().writes.len(), 1);
    }

    #[test]
    fn test_set_digit_addressing() {
        let mut dev = driver(2);
        dev.set_digit(0, 0xAA).unwrap();
        dev.set_digit(9, 0x55).unwrap();

        assert_eq!(
            dev.writer().writes.as_slice(),
            &[w(Target::Chip(0), 1, 0xAA), w(Target::Chip(1), 2, 0x55)]
        );

        assert_eq!(dev.set_digit(16, 0), Err(Error::InvalidArgument));
        assert_eq!(dev.writer().writes.len(), 2);
    }

    #[test]
    fn test_set_digit_mirrored() {
        let config = CascadeConfig {
            cascade_size: 2,
            digits: 0,
            mirrored: true,
        };
        let mut dev = Max7219::new(MockBus::new(), config).unwrap();
        dev.set_digit(0, 0x01).unwrap();

        assert_eq!(dev.writer().writes[0], w(Target::Chip(1), 8, 0x01));
    }

    #[test]
    fn test_draw_image_clips_at_last_digit() {
        let mut dev = driver(1);
        let image = [1, 2, 3, 4, 5, 6, 7, 8];
        dev.draw_image_8x8(5, &image).unwrap();

        assert_eq!(
            dev.writer().writes.as_slice(),
            &[
                w(Target::Chip(0), 6, 1),
                w(Target::Chip(0), 7, 2),
                w(Target::Chip(0), 8, 3),
            ]
        );

        // Entirely past the end
        dev.draw_image_8x8(8, &image).unwrap();
        assert_eq!(dev.writer().writes.len(), 3);
    }

    #[test]
    fn test_draw_image_full_block() {
        let mut dev = driver(2);
        let image = [0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x7E, 0x3C, 0x18];
        dev.draw_image_8x8(8, &image).unwrap();

        let writes = &dev.writer().writes;
        assert_eq!(writes.len(), 8);
        for (i, write) in writes.iter().enumerate() {
            assert_eq!(*write, w(Target::Chip(1), 1 + i as u8, image[i]));
        }
    }

    #[test]
    fn test_print_static_writes() {
        let mut dev = driver(4);
        dev.print_static("AB").unwrap();

        let fb = rasterize("AB").unwrap();
        let writes = &dev.writer().writes;
        assert_eq!(&writes[..8], &clear_writes(0));
        assert_eq!(writes.len(), 8 + 2 * 8);

        // Block 0 on the last chip, rows sent top to bottom as registers 8..1
        for row in 0..8u8 {
            assert_eq!(
                writes[8 + row as usize],
                w(Target::Chip(3), 8 - row, fb.block(0, row))
            );
            assert_eq!(
                writes[16 + row as usize],
                w(Target::Chip(2), 8 - row, fb.block(1, row))
            );
        }
    }

    #[test]
    fn test_print_static_caps_at_cascade() {
        let mut dev = driver(2);
        dev.print_static("HELLO").unwrap();
        assert_eq!(dev.writer().writes.len(), 8 + 2 * 8);

        let chips_written = dev.writer().writes[8..]
            .iter()
            .all(|write| matches!(write.target, Target::Chip(0) | Target::Chip(1)));
        assert!(chips_written);
    }

    #[test]
    fn test_print_static_is_repeatable() {
        let mut dev = driver(3);
        dev.print_static("Hi!").unwrap();
        let first = dev.writer().writes.len();
        dev.print_static("Hi!").unwrap();

        let writes = &dev.writer().writes;
        assert_eq!(writes.len(), first * 2);
        assert_eq!(&writes[..first], &writes[first..]);
    }

    #[test]
    fn test_unprintable_characters_write_nothing_extra() {
        let mut noisy = driver(4);
        let mut clean = driver(4);
        noisy.print_static("A\x01B").unwrap();
        clean.print_static("AB").unwrap();
        assert_eq!(noisy.writer().writes.len(), 8 + 2 * 8);
        assert_eq!(noisy.writer().writes.as_slice(), clean.writer().writes.as_slice());

        let mut noisy = driver(4);
        let mut clean = driver(4);
        let mut delay = CountingDelay::default();
        noisy.scroll_text("A\x01B", &mut delay, 0).unwrap();
        clean.scroll_text("AB", &mut delay, 0).unwrap();
        assert_eq!(noisy.writer().writes.len(), 8 + 12 * 16);
        assert_eq!(noisy.writer().writes.as_slice(), clean.writer().writes.as_slice());
    }

    #[test]
    fn test_print_static_empty_clears_only() {
        let mut dev = driver(2);
        dev.print_static("").unwrap();
        assert_eq!(dev.writer().writes.as_slice(), &clear_writes(0));
    }

    #[test]
    fn test_render_framebuffer_caps_blocks() {
        let mut dev = driver(1);
        let fb = rasterize("ABC").unwrap();
        dev.render_framebuffer(&fb, 3).unwrap();
        assert_eq!(dev.writer().writes.len(), 8);
    }

    #[test]
    fn test_scroll_empty_text_writes_nothing() {
        let mut dev = driver(4);
        let mut delay = CountingDelay::default();
        dev.scroll_text("", &mut delay, 50).unwrap();

        assert!(dev.writer().writes.is_empty());
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn test_scroll_frame_count() {
        // 'A' is 5 wide, '1' is 3 wide: (5 + 1) + (3 + 1) = 10 frames
        let mut dev = driver(4);
        let mut delay = CountingDelay::default();
        dev.scroll_text("A1", &mut delay, 25).unwrap();

        assert_eq!(delay.calls, 10);
        assert_eq!(delay.total_ms, 250);
        // Clear, then 10 frames of 2 blocks x 8 rows
        assert_eq!(dev.writer().writes.len(), 8 + 10 * 16);
    }

    #[test]
    fn test_scroll_frames_shift_left() {
        let mut dev = driver(2);
        let mut delay = CountingDelay::default();
        dev.scroll_text("AB", &mut delay, 0).unwrap();

        let mut fb = rasterize("AB").unwrap();
        let writes = &dev.writer().writes[8..];
        assert_eq!(writes.len(), 12 * 16);

        for frame in writes.chunks(16) {
            for row in 0..8u8 {
                assert_eq!(
                    frame[row as usize],
                    w(Target::Chip(1), 8 - row, fb.block(0, row))
                );
                assert_eq!(
                    frame[8 + row as usize],
                    w(Target::Chip(0), 8 - row, fb.block(1, row))
                );
            }
            fb.shift_columns();
        }
    }

    #[test]
    fn test_scroll_aborts_on_transport_error() {
        // Clear (8) + one full frame (16) + part of the second
        let mut dev = Max7219::new(MockBus::failing_after(30), CascadeConfig::new(2)).unwrap();
        let mut delay = CountingDelay::default();

        assert_eq!(dev.scroll_text("AB", &mut delay, 10), Err(Error::Transport(BusError)));
        assert_eq!(delay.calls, 1);
        assert_eq!(dev.writer().writes.len(), 30);
    }

    #[test]
    fn test_scroll_out_of_memory_before_io() {
        let mut text: heapless::String<256> = heapless::String::new();
        for _ in 0..200 {
            text.push('W').unwrap();
        }

        let mut dev = driver(4);
        let mut delay = CountingDelay::default();
        assert_eq!(dev.scroll_text(&text, &mut delay, 10), Err(Error::OutOfMemory));
        assert_eq!(dev.print_static(&text), Err(Error::OutOfMemory));
        assert!(dev.writer().writes.is_empty());
    }

    #[test]
    fn test_scroll_step_cancellation() {
        let mut dev = driver(4);
        let mut scroller = dev.start_scroll("Hello").unwrap();
        assert_eq!(scroller.state(), ScrollState::Idle);

        // Stop after three frames
        for _ in 0..3 {
            assert_eq!(dev.scroll_step(&mut scroller).unwrap(), ScrollState::Scrolling);
        }
        assert_eq!(scroller.frames(), 3);
        assert_eq!(dev.writer().writes.len(), 8 + 3 * 4 * 8);
    }

    #[test]
    fn test_scroll_step_after_done() {
        let mut dev = driver(1);
        let mut scroller = dev.start_scroll("!").unwrap();
        assert_eq!(dev.scroll_step(&mut scroller).unwrap(), ScrollState::Scrolling);
        assert_eq!(dev.scroll_step(&mut scroller).unwrap(), ScrollState::Done);

        let count = dev.writer().writes.len();
        assert_eq!(dev.scroll_step(&mut scroller).unwrap(), ScrollState::Done);
        assert_eq!(dev.writer().writes.len(), count);
    }

    #[test]
    fn test_scroll_async_matches_blocking() {
        let mut blocking = driver(3);
        let mut delay = CountingDelay::default();
        blocking.scroll_text("ok?", &mut delay, 5).unwrap();

        let mut dev = driver(3);
        let mut async_delay = CountingDelay::default();
        embassy_futures::block_on(dev.scroll_text_async("ok?", &mut async_delay, 5)).unwrap();

        assert_eq!(dev.writer().writes, blocking.writer().writes);
        assert_eq!(async_delay.calls, delay.calls);
        assert_eq!(async_delay.total_ms, delay.total_ms);
    }

    #[test]
    fn test_release_returns_writer() {
        let mut dev = driver(1);
        dev.set_shutdown(false).unwrap();
        let bus = dev.release();
        assert_eq!(bus.writes.len(), 1);
    }
}
