//! Default colors used by the preset scenes.

use crate::foundation::core::Rgb8;

/// Deep blue.
pub const BLUE_E: Rgb8 = Rgb8::from_hex(0x1C758A);
/// Teal.
pub const TEAL_D: Rgb8 = Rgb8::from_hex(0x55C1A7);
/// Dark teal.
pub const TEAL_E: Rgb8 = Rgb8::from_hex(0x49A88F);
/// Dark green.
pub const GREEN_E: Rgb8 = Rgb8::from_hex(0x699C52);
/// Yellow.
pub const YELLOW: Rgb8 = Rgb8::from_hex(0xFFFF00);
/// Light blue.
pub const BLUE_D: Rgb8 = Rgb8::from_hex(0x29ABCA);
/// Muted purple.
pub const PURPLE_D: Rgb8 = Rgb8::from_hex(0x9A72AC);
/// Dark purple.
pub const PURPLE_E: Rgb8 = Rgb8::from_hex(0x644172);
/// Pink.
pub const PINK: Rgb8 = Rgb8::from_hex(0xD147BD);

/// Pulse lattice gradient.
pub const PULSE_GRADIENT: [Rgb8; 3] = [BLUE_E, TEAL_E, GREEN_E];
/// Surface checkerboard.
pub const CHECKERBOARD: [Rgb8; 2] = [BLUE_E, TEAL_D];
/// Lissajous curve gradient.
pub const CURVE_GRADIENT: [Rgb8; 2] = [PURPLE_D, BLUE_D];
/// Trace trail gradient.
pub const TRAIL_GRADIENT: [Rgb8; 3] = [BLUE_E, PURPLE_E, PINK];
/// Pulse source dot.
pub const SOURCE: Rgb8 = YELLOW;
/// Trace marker dot.
pub const TRACER: Rgb8 = YELLOW;
