//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two bus framings
//! for communicating with the SSD1306 controller:
//!
//! - [`I2cInterface`]: every command is a two-byte write (`0x80`, opcode) to the
//!   display's bus address; frame data is a single write prefixed with `0x40`.
//! - [`SpiInterface`]: a **DC** (data/command select) pin is driven low for
//!   commands and high for data, and an active-low **RST** pin is pulsed once
//!   before initialization. Chip select is owned by the [`SpiDevice`], which
//!   asserts it for the duration of every write and releases it afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_gfx::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! // Create interface with the default bus address (0x3C)
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Send command
//! let _ = interface.send_command(0xAE); // Display off
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};
use embedded_hal::spi::SpiDevice;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default I2C address of SSD1306 modules (SA0 pin low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Trait for hardware interface to SSD1306 controller
///
/// This trait abstracts over the bus framing, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// tell command bytes apart from data bytes.
///
/// ## Implementing
///
/// For most cases, use [`I2cInterface`] or [`SpiInterface`]. If the panel
/// sits behind a bus multiplexer, wrap the bus so that the right channel is
/// selected before each transfer; the driver itself does no locking.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// Parameter bytes of multi-byte commands are sent as commands too.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a command followed by its parameter bytes, in order
    ///
    /// The default implementation sends one command byte at a time and
    /// stops at the first failure.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send display RAM data bytes to the controller in one transfer
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// Transports without a reset line do nothing.
    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug, PartialEq, Eq)]
pub enum InterfaceError<BusErr, PinErr> {
    /// I2C or SPI communication error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// I2C transport for SSD1306 modules
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2C interface at [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new I2C interface at a specific 7-bit address
    ///
    /// Modules with the SA0 pin pulled high answer at `0x3D`.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, Infallible>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(|e| InterfaceError::Bus(e))
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes in one transaction go out back to back, without a repeated start
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
            )
            .map_err(|e| InterfaceError::Bus(e))
    }
}

/// 4-wire SPI transport for SSD1306 modules
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (manages chip select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_gfx::{Builder, Dimensions, Display, SpiInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = SpiInterface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // DC
///     MockPin,  // RST
/// );
///
/// # let dims = match Dimensions::new(128, 64) {
/// #     Ok(dims) => dims,
/// #     Err(_) => return,
/// # };
/// # let config = match Builder::new().dimensions(dims).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config, [0u8; 1024]);
/// ```
pub struct SpiInterface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(|e| InterfaceError::Pin(e))?;
        self.spi
            .write(&[command])
            .map_err(|e| InterfaceError::Bus(e))?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(|e| InterfaceError::Pin(e))?;
        self.spi.write(data).map_err(|e| InterfaceError::Bus(e))?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: HIGH -> wait 1ms -> LOW -> wait 10ms -> HIGH
        self.rst.set_high().map_err(|e| InterfaceError::Pin(e))?;
        delay.delay_ms(1);
        self.rst.set_low().map_err(|e| InterfaceError::Pin(e))?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|e| InterfaceError::Pin(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::i2c::ErrorType as I2cErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    /// Everything the mock bus and pins observed, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        I2cWrite(u8, Vec<u8>),
        SpiWrite(Vec<u8>),
        Dc(bool),
        Rst(bool),
        DelayMs(u32),
    }

    type Log = RefCell<Vec<Event>>;

    struct MockI2c<'a>(&'a Log);

    impl I2cErrorType for MockI2c<'_> {
        type Error = Infallible;
    }

    impl I2c for MockI2c<'_> {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            // Merge adjacent writes the way a real bus transmits them
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.0.borrow_mut().push(Event::I2cWrite(address, bytes));
            Ok(())
        }
    }

    struct MockSpi<'a>(&'a Log);

    impl SpiErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter() {
                if let embedded_hal::spi::Operation::Write(data) = op {
                    self.0.borrow_mut().push(Event::SpiWrite(data.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a Log,
        is_dc: bool,
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true);
            Ok(())
        }
    }

    impl MockPin<'_> {
        fn record(&self, level: bool) {
            let event = if self.is_dc {
                Event::Dc(level)
            } else {
                Event::Rst(level)
            };
            self.log.borrow_mut().push(event);
        }
    }

    struct MockDelay<'a>(&'a Log);

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    #[test]
    fn test_i2c_command_framing() {
        let log = Log::default();
        let mut interface = I2cInterface::new(MockI2c(&log));
        interface.send_command(0xAE).unwrap();
        assert_eq!(
            log.into_inner(),
            [Event::I2cWrite(0x3C, alloc::vec![0x80, 0xAE])]
        );
    }

    #[test]
    fn test_i2c_commands_are_framed_individually() {
        let log = Log::default();
        let mut interface = I2cInterface::new(MockI2c(&log));
        interface.send_commands(&[0x81, 0x7F]).unwrap();
        assert_eq!(
            log.into_inner(),
            [
                Event::I2cWrite(0x3C, alloc::vec![0x80, 0x81]),
                Event::I2cWrite(0x3C, alloc::vec![0x80, 0x7F]),
            ]
        );
    }

    #[test]
    fn test_i2c_data_is_single_prefixed_transfer() {
        let log = Log::default();
        let mut interface = I2cInterface::with_address(MockI2c(&log), 0x3D);
        interface.send_data(&[1, 2, 3]).unwrap();
        assert_eq!(
            log.into_inner(),
            [Event::I2cWrite(0x3D, alloc::vec![0x40, 1, 2, 3])]
        );
    }

    #[test]
    fn test_spi_dc_selects_command_or_data() {
        let log = Log::default();
        let dc = MockPin {
            log: &log,
            is_dc: true,
        };
        let rst = MockPin {
            log: &log,
            is_dc: false,
        };
        let mut interface = SpiInterface::new(MockSpi(&log), dc, rst);
        interface.send_command(0xAF).unwrap();
        interface.send_data(&[0xAA, 0x55]).unwrap();
        assert_eq!(
            log.into_inner(),
            [
                Event::Dc(false),
                Event::SpiWrite(alloc::vec![0xAF]),
                Event::Dc(true),
                Event::SpiWrite(alloc::vec![0xAA, 0x55]),
            ]
        );
    }

    #[test]
    fn test_spi_reset_pulse() {
        let log = Log::default();
        let dc = MockPin {
            log: &log,
            is_dc: true,
        };
        let rst = MockPin {
            log: &log,
            is_dc: false,
        };
        let mut interface = SpiInterface::new(MockSpi(&log), dc, rst);
        let mut delay = MockDelay(&log);
        interface.reset(&mut delay).unwrap();
        assert_eq!(
            log.into_inner(),
            [
                Event::Rst(true),
                Event::DelayMs(1),
                Event::Rst(false),
                Event::DelayMs(10),
                Event::Rst(true),
            ]
        );
    }

    #[test]
    fn test_i2c_reset_is_noop() {
        let log = Log::default();
        let mut interface = I2cInterface::new(MockI2c(&log));
        let mut delay = MockDelay(&log);
        interface.reset(&mut delay).unwrap();
        assert!(log.into_inner().is_empty());
    }
}
