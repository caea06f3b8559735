//! Shape renderer: the moving square and the screen border
//!
//! All primitives draw into a [`Framebuffer`]; nothing here talks to
//! hardware. A full frame is always composed the same way - clear, border,
//! square - so the square's previous position never survives as garbage.

use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

/// Side length of the joystick-controlled square, in pixels
pub const SQUARE_SIZE: i32 = 8;

/// Dash pattern length along dashed border edges (2 px on, 2 px off)
const DASH_PERIOD: i32 = 4;

/// Border drawn around the screen edge
///
/// Cycles with period 4 on each accepted button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// No border
    #[default]
    None,
    /// Single 1 px rectangle on the outermost rows/columns
    Thin,
    /// Thin border plus a second rectangle inset by 2 px
    Double,
    /// Thin border with a 2-on / 2-off dash pattern
    Dashed,
}

impl BorderStyle {
    /// Advance to the next style in the cycle
    pub fn next(self) -> Self {
        match self {
            BorderStyle::None => BorderStyle::Thin,
            BorderStyle::Thin => BorderStyle::Double,
            BorderStyle::Double => BorderStyle::Dashed,
            BorderStyle::Dashed => BorderStyle::None,
        }
    }
}

/// Draw the filled 8x8 square with its top-left corner at (x, y)
///
/// The position is re-clamped here so the square always lies fully on
/// screen; any i32 input is safe.
pub fn draw_square(fb: &mut Framebuffer, x: i32, y: i32) {
    let x = x.clamp(0, WIDTH as i32 - SQUARE_SIZE);
    let y = y.clamp(0, HEIGHT as i32 - SQUARE_SIZE);

    for px in x..x + SQUARE_SIZE {
        for py in y..y + SQUARE_SIZE {
            fb.set_pixel(px, py, true);
        }
    }
}

/// Draw the screen border in the given style
pub fn draw_border(fb: &mut Framebuffer, style: BorderStyle) {
    match style {
        BorderStyle::None => {}
        BorderStyle::Thin => draw_rect_outline(fb, 0, |_| true),
        BorderStyle::Double => {
            draw_rect_outline(fb, 0, |_| true);
            draw_rect_outline(fb, 2, |_| true);
        }
        BorderStyle::Dashed => draw_rect_outline(fb, 0, |along| along % DASH_PERIOD <= 1),
    }
}

/// Draw a 1 px rectangle outline inset from the screen edge
///
/// `keep` decides pixel by pixel whether to draw, given the coordinate
/// along the edge (x for horizontal edges, y for vertical ones).
fn draw_rect_outline(fb: &mut Framebuffer, inset: i32, keep: impl Fn(i32) -> bool) {
    let (left, top) = (inset, inset);
    let right = WIDTH as i32 - 1 - inset;
    let bottom = HEIGHT as i32 - 1 - inset;

    for x in left..=right {
        if keep(x) {
            fb.set_pixel(x, top, true);
            fb.set_pixel(x, bottom, true);
        }
    }
    for y in top..=bottom {
        if keep(y) {
            fb.set_pixel(left, y, true);
            fb.set_pixel(right, y, true);
        }
    }
}

/// Compose one full frame: clear, border, square - in that order
///
/// Partial redraws are deliberately not offered; redrawing the square
/// without clearing would leave its old position on screen.
pub fn compose_frame(fb: &mut Framebuffer, style: BorderStyle, x: i32, y: i32) {
    fb.clear();
    draw_border(fb, style);
    draw_square(fb, x, y);
}
