//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_ROWS, MIN_ROWS, NATIVE_COLUMNS};
pub use crate::rotation::Rotation;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (number of columns wired to segment outputs)
    pub width: u16,
    /// Height in pixels (number of rows wired to common outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > NATIVE_COLUMNS
    /// - height < MIN_ROWS or height > MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > NATIVE_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if !(MIN_ROWS..=MAX_ROWS).contains(&height) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages, rounded up for heights that are not a multiple of 8
    pub fn pages(&self) -> u16 {
        self.height.div_ceil(8)
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }

    /// Columns the panel is shifted by inside the controller's 128-column range
    ///
    /// Narrow panels are wired to the middle of the segment outputs.
    pub fn column_offset(&self) -> u16 {
        if self.width < NATIVE_COLUMNS {
            (NATIVE_COLUMNS - self.width) / 2
        } else {
            0
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Whether the panel voltage is supplied externally instead of by the charge pump
    pub external_power_supply: bool,
    /// Orientation applied during initialization
    pub rotation: Rotation,
    /// Contrast level applied during initialization
    pub contrast: u8,
    /// Display clock divide ratio / oscillator frequency
    pub clock_divider: u8,
    /// VCOMH deselect level
    pub vcom_deselect: u8,
}

impl Config {
    /// Pre-charge period matching the power supply mode
    pub fn precharge(&self) -> u8 {
        if self.external_power_supply {
            crate::command::PRECHARGE_EXTERNAL_VCC
        } else {
            crate::command::PRECHARGE_INTERNAL_VCC
        }
    }

    /// Charge pump setting matching the power supply mode
    pub fn charge_pump(&self) -> u8 {
        if self.external_power_supply {
            crate::command::CHARGE_PUMP_OFF
        } else {
            crate::command::CHARGE_PUMP_ON
        }
    }

    /// COM pin layout for the panel's aspect ratio
    pub fn com_pins(&self) -> u8 {
        if self.dimensions.width > 2 * self.dimensions.height {
            crate::command::COM_PINS_SEQUENTIAL
        } else {
            crate::command::COM_PINS_ALTERNATIVE
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1306_gfx::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .external_power_supply(false)
///     .rotation(Rotation::Rotate0)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.charge_pump(), 0x14);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// External panel supply
    external_power_supply: bool,
    /// Display rotation
    rotation: Rotation,
    /// Initial contrast
    contrast: u8,
    /// Clock divide ratio / oscillator frequency
    clock_divider: u8,
    /// VCOMH deselect level
    vcom_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Most modules generate the panel voltage with the on-chip charge pump
            external_power_supply: false,
            rotation: Rotation::Rotate0,
            // Maximum
            contrast: 0xFF,
            // Divide ratio 1, default oscillator frequency
            clock_divider: 0x80,
            // 0.83 x Vcc
            vcom_deselect: 0x30,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set whether the panel voltage is supplied externally
    pub fn external_power_supply(mut self, external: bool) -> Self {
        self.external_power_supply = external;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the contrast applied during initialization
    pub fn contrast(mut self, level: u8) -> Self {
        self.contrast = level;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divider(mut self, value: u8) -> Self {
        self.clock_divider = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            external_power_supply: self.external_power_supply,
            rotation: self.rotation,
            contrast: self.contrast,
            clock_divider: self.clock_divider,
            vcom_deselect: self.vcom_deselect,
        })
    }
}
