//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::command::{
    DISPLAY_ON, HORIZONTAL_ADDRESSING, IREF_INTERNAL, SET_CHARGE_PUMP, SET_COL_ADDR,
    SET_COM_PIN_CFG, SET_CONTRAST, SET_DISP_CLK_DIV, SET_DISP_OFFSET, SET_DISP_START_LINE,
    SET_DISPLAY, SET_ENTIRE_ON, SET_IREF_SELECT, SET_MEM_ADDR, SET_MUX_RATIO, SET_NORM_INV,
    SET_PAGE_ADDR, SET_PRECHARGE, SET_VCOM_DESEL,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::draw::PixelSink;
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Length of the power-up command sequence
pub const INIT_SEQUENCE_LEN: usize = 27;

/// Controller power state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// `init` has not completed
    #[default]
    Uninitialized,
    /// Panel is off; display RAM and settings are retained
    Off,
    /// Panel is showing display RAM
    On,
}

/// Driver for an SSD1306 panel with an owned frame buffer
///
/// Drawing happens in the local [`PixelBuffer`]; nothing reaches the panel
/// until [`show`](Self::show) transfers the whole buffer.
///
/// `B` is the buffer storage, e.g. `[u8; 1024]` for a 128x64 panel, or
/// `Vec<u8>` with the `alloc` feature.
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Local copy of display RAM
    buffer: PixelBuffer<B>,
    /// Power state
    state: PowerState,
    /// Last contrast level sent
    contrast: u8,
    /// Whether the panel is inverted
    inverted: bool,
    /// Current orientation
    rotation: Rotation,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance over caller-provided buffer storage
    ///
    /// Nothing is sent to the panel until [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `storage` is shorter than
    /// `config.dimensions.buffer_size()`.
    pub fn new(interface: I, config: Config, storage: B) -> Result<Self, Error<I>> {
        let Dimensions { width, height } = config.dimensions;
        let buffer = PixelBuffer::new(width, height, storage)?;
        Ok(Self {
            interface,
            contrast: config.contrast,
            rotation: config.rotation,
            config,
            buffer,
            state: PowerState::Uninitialized,
            inverted: false,
        })
    }

    /// Reset and configure the controller, then blank the panel
    ///
    /// Pulses the transport's reset line, sends the power-up sequence, clears
    /// the buffer and transfers it. Every call pulses the reset line again,
    /// so a second `init` hardware-resets the panel, reruns the sequence and
    /// restores the configured contrast and rotation. On I2C the reset is a
    /// no-op.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!(
            "init {}x{} (external supply: {})",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.external_power_supply
        );
        self.interface.reset(delay).map_err(Error::Interface)?;

        let sequence = self.init_sequence();
        self.interface
            .send_commands(&sequence)
            .map_err(Error::Interface)?;

        self.contrast = self.config.contrast;
        self.rotation = self.config.rotation;
        self.inverted = false;
        self.state = PowerState::On;

        self.buffer.fill(Color::Off);
        self.show()?;
        debug!("init complete");
        Ok(())
    }

    /// The power-up command sequence for the current configuration
    ///
    /// The order is fixed; the charge pump must be configured after the
    /// timing registers and before the panel is switched on.
    pub fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        let config = &self.config;
        let rotation = config.rotation;
        let mux = (config.dimensions.height - 1) as u8;
        [
            SET_DISPLAY,
            SET_MEM_ADDR,
            HORIZONTAL_ADDRESSING,
            SET_DISP_START_LINE,
            rotation.segment_remap(),
            SET_MUX_RATIO,
            mux,
            rotation.com_scan_direction(),
            SET_DISP_OFFSET,
            0x00,
            SET_COM_PIN_CFG,
            config.com_pins(),
            SET_DISP_CLK_DIV,
            config.clock_divider,
            SET_PRECHARGE,
            config.precharge(),
            SET_VCOM_DESEL,
            config.vcom_deselect,
            SET_CONTRAST,
            config.contrast,
            SET_ENTIRE_ON,
            SET_NORM_INV,
            SET_IREF_SELECT,
            IREF_INTERNAL,
            SET_CHARGE_PUMP,
            config.charge_pump(),
            SET_DISPLAY | DISPLAY_ON,
        ]
    }

    /// Turn the panel off (sleep); display RAM is kept
    pub fn power_off(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug!("power off");
        self.send_command(SET_DISPLAY)?;
        self.state = PowerState::Off;
        Ok(())
    }

    /// Turn the panel back on
    pub fn power_on(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug!("power on");
        self.send_command(SET_DISPLAY | DISPLAY_ON)?;
        self.state = PowerState::On;
        Ok(())
    }

    /// Set the contrast level (0-255)
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug!("contrast {}", level);
        self.send_commands(&[SET_CONTRAST, level])?;
        self.contrast = level;
        Ok(())
    }

    /// Invert the panel: lit buffer bits show dark and vice versa
    ///
    /// Only the panel is affected; buffer contents are unchanged.
    pub fn set_invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug!("invert {}", inverted);
        self.send_command(SET_NORM_INV | u8::from(inverted))?;
        self.inverted = inverted;
        Ok(())
    }

    /// Change the panel orientation
    ///
    /// Takes effect on the panel immediately, without a new transfer.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        self.ensure_initialized()?;
        debug!("rotation {:?}", rotation);
        self.send_command(rotation.com_scan_direction())?;
        self.send_command(rotation.segment_remap())?;
        self.rotation = rotation;
        Ok(())
    }

    /// Transfer the whole buffer to display RAM
    ///
    /// The column and page window is sent before every transfer.
    pub fn show(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let (x0, x1) = self.column_window();
        let last_page = (self.buffer.pages() - 1) as u8;
        trace!(
            "show columns {}..={} pages 0..={} ({} bytes)",
            x0,
            x1,
            last_page,
            self.buffer.as_bytes().len()
        );
        self.send_commands(&[SET_COL_ADDR, x0, x1])?;
        self.send_commands(&[SET_PAGE_ADDR, 0, last_page])?;
        self.interface
            .send_data(self.buffer.as_bytes())
            .map_err(Error::Interface)
    }

    /// First and last controller column covered by the panel
    ///
    /// Narrow panels are centered in the controller's column range.
    pub fn column_window(&self) -> (u8, u8) {
        let dims = self.config.dimensions;
        let x0 = dims.column_offset();
        let x1 = x0 + dims.width - 1;
        (x0 as u8, x1 as u8)
    }

    /// Fill the buffer with one color
    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Current power state
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// Last contrast level sent to the panel
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Whether the panel is inverted
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Current orientation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The frame buffer
    pub fn buffer(&self) -> &PixelBuffer<B> {
        &self.buffer
    }

    /// The frame buffer, mutably
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<B> {
        &mut self.buffer
    }

    /// Get a reference to the interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Release the interface and buffer storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.buffer.into_inner())
    }

    fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.state == PowerState::Uninitialized {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface
            .send_command(command)
            .map_err(Error::Interface)
    }

    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }
}

#[cfg(feature = "alloc")]
impl<I> Display<I, alloc::vec::Vec<u8>>
where
    I: DisplayInterface,
{
    /// Create a new Display with a heap-allocated buffer
    pub fn with_allocated_buffer(interface: I, config: Config) -> Self {
        let Dimensions { width, height } = config.dimensions;
        Self {
            interface,
            contrast: config.contrast,
            rotation: config.rotation,
            config,
            buffer: PixelBuffer::allocate(width, height),
            state: PowerState::Uninitialized,
            inverted: false,
        }
    }
}

impl<I, B> PixelSink for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn bounds(&self) -> (i32, i32) {
        self.buffer.bounds()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.set_pixel(x, y, color);
    }
}
