//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! OLED display controller. Every command and parameter byte travels over
//! the command channel of the [`DisplayInterface`](crate::DisplayInterface);
//! only frame buffer contents travel over the data channel.
//!
//! ## Command Structure
//!
//! Commands that take parameters are followed by their parameter bytes,
//! also sent as commands:
//! 1. Send opcode (e.g. [`SET_CONTRAST`])
//! 2. Send parameter byte(s) (e.g. the contrast level)
//!
//! Some opcodes carry a setting in their low bits instead
//! (e.g. `SET_DISPLAY | 0x01` turns the panel on).
//!
//! ## Example
//!
//! ```rust
//! use ssd1306_gfx::{command, DisplayInterface};
//! # struct Recorder(Vec<u8>);
//! # impl DisplayInterface for Recorder {
//! #     type Error = core::convert::Infallible;
//! #     fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
//! #         self.0.push(command);
//! #         Ok(())
//! #     }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Recorder(Vec::new());
//! // Half brightness
//! let _ = interface.send_commands(&[command::SET_CONTRAST, 0x7F]);
//!
//! // Panel on
//! let _ = interface.send_command(command::SET_DISPLAY | command::DISPLAY_ON);
//! # assert_eq!(interface.0, [0x81, 0x7F, 0xAF]);
//! ```

// Fundamental commands

/// Set contrast command (0x81)
///
/// Requires 1 parameter byte: contrast level 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display on command (0xA4)
///
/// Bit 0: 0 = output follows RAM contents, 1 = all pixels on.
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Normal/inverse display command (0xA6)
///
/// Bit 0: 0 = normal, 1 = inverted.
pub const SET_NORM_INV: u8 = 0xA6;

/// Display on/off command (0xAE)
///
/// Bit 0: 0 = sleep, 1 = on. See [`DISPLAY_ON`].
pub const SET_DISPLAY: u8 = 0xAE;

/// Display-on bit for [`SET_DISPLAY`]
pub const DISPLAY_ON: u8 = 0x01;

// Addressing commands

/// Memory addressing mode command (0x20)
///
/// Requires 1 parameter byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEM_ADDR: u8 = 0x20;

/// Horizontal addressing mode parameter for [`SET_MEM_ADDR`]
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Column address window command (0x21)
///
/// Requires 2 parameter bytes: [start column, end column].
pub const SET_COL_ADDR: u8 = 0x21;

/// Page address window command (0x22)
///
/// Requires 2 parameter bytes: [start page, end page].
pub const SET_PAGE_ADDR: u8 = 0x22;

// Hardware configuration commands

/// Display start line command (0x40)
///
/// Bits 0..=5 select the RAM row mapped to COM0.
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Segment remap command (0xA0)
///
/// Bit 0: 0 = column 0 mapped to SEG0, 1 = column 127 mapped to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio command (0xA8)
///
/// Requires 1 parameter byte: number of rows - 1.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// Internal current reference select command (0xAD)
///
/// Requires 1 parameter byte, see [`IREF_INTERNAL`].
pub const SET_IREF_SELECT: u8 = 0xAD;

/// Enable the internal current reference while the display is on
pub const IREF_INTERNAL: u8 = 0x30;

/// COM output scan direction command (0xC0)
///
/// Bit 3: 0 = scan COM0 to COM[N-1], 1 = scan COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Display offset command (0xD3)
///
/// Requires 1 parameter byte: vertical shift by COM.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration command (0xDA)
///
/// Requires 1 parameter byte, see [`COM_PINS_SEQUENTIAL`] and [`COM_PINS_ALTERNATIVE`].
pub const SET_COM_PIN_CFG: u8 = 0xDA;

/// Sequential COM pin layout, used by panels wider than twice their height
pub const COM_PINS_SEQUENTIAL: u8 = 0x02;

/// Alternative COM pin layout, used by all other panels
pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

// Timing and driving scheme commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 parameter byte.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge period command (0xD9)
///
/// Requires 1 parameter byte: phase 2 in the high nibble, phase 1 in the low nibble.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Pre-charge period when the panel voltage comes from the internal charge pump
pub const PRECHARGE_INTERNAL_VCC: u8 = 0xF1;

/// Pre-charge period when the panel voltage is supplied externally
pub const PRECHARGE_EXTERNAL_VCC: u8 = 0x22;

/// VCOMH deselect level command (0xDB)
///
/// Requires 1 parameter byte.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 parameter byte, see [`CHARGE_PUMP_ON`] and [`CHARGE_PUMP_OFF`].
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Enable the internal charge pump
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Disable the internal charge pump (external panel supply)
pub const CHARGE_PUMP_OFF: u8 = 0x10;

// Bus framing

/// I2C control byte announcing a single command byte (Co = 1, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x80;

/// I2C control byte announcing a stream of data bytes (Co = 0, D/C# = 1)
pub const CONTROL_DATA: u8 = 0x40;
