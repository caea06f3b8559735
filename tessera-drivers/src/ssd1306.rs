//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Owns the
//! in-memory [`Framebuffer`] and the controller session: drawing goes into
//! the buffer through [`Ssd1306::framebuffer_mut`], and [`Ssd1306::flush`]
//! retransmits the whole buffer page by page.
//!
//! Every byte on the wire is framed by a leading control byte: `0x00` for
//! "next byte is a command", `0x40` for "next byte is pixel data". Each
//! framed pair is one blocking bus write. The controller also accepts
//! multi-byte data bursts after a single `0x40`, but the per-byte form is
//! what this driver speaks.

use embedded_hal::i2c::I2c;
use tessera_core::framebuffer::{Framebuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Control byte announcing a command byte
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a pixel data byte
pub const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_ADDR_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up command sequence
///
/// Ordered list required by this controller family: power off, clock,
/// multiplex ratio, offset, start line, charge pump, horizontal addressing,
/// segment/COM remap, COM pins, contrast, pre-charge, VCOMH, RAM resume,
/// non-inverted, display on. Reproduced bit-exact for hardware
/// compatibility.
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock divide ratio
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_ADDR_MODE,
    0x00, // Horizontal increment
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0x7F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
///
/// Holds exclusive access to the display's bus address; no other part of
/// the firmware writes to it.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    framebuffer: Framebuffer,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new driver with a cleared framebuffer
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            framebuffer: Framebuffer::new(),
        }
    }

    /// Initialize the display
    ///
    /// Issues the fixed power-up command sequence, then flushes the cleared
    /// buffer so the panel starts blank. A bus error here means there is no
    /// display link; callers should treat it as unrecoverable.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        self.flush()
    }

    /// Send one command byte
    fn command(&mut self, c: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[CONTROL_COMMAND, c])
    }

    /// Send one pixel data byte
    fn data(&mut self, d: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[CONTROL_DATA, d])
    }

    /// Borrow the backing framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Borrow the backing framebuffer for drawing
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Turn every buffered pixel off (does not touch the panel until flush)
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Transfer the whole framebuffer to the panel
    ///
    /// For each of the 8 pages: set the page address and the low/high
    /// column address to the page start, then stream that page's 128 bytes
    /// in column order. There is no dirty tracking; the full kilobyte goes
    /// out every time, which is well within budget at a 10 Hz cadence.
    ///
    /// A bus error aborts the flush; the caller may simply try again next
    /// frame.
    pub fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut bytes = [0u8; WIDTH];
            bytes.copy_from_slice(self.framebuffer.page(page));
            for b in bytes {
                self.data(b)?;
            }
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn the panel on/off without losing the buffer
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }
}
