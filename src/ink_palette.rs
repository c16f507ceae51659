//! The bit-exact RGBA ink palette (spec §6). These values are an external
//! contract with the sandbox — never remap them, even to "fix" a color that
//! looks wrong against some other render of the same blueprint.

use crate::color::Color;

pub const CROSS: Color = Color::rgba(102, 120, 142, 255);
pub const TUNNEL: Color = Color::rgba(83, 85, 114, 255);
pub const MESH: Color = Color::rgba(100, 106, 87, 255);

pub const BUS1: Color = Color::rgba(122, 47, 36, 255);
pub const BUS2: Color = Color::rgba(62, 122, 36, 255);
pub const BUS3: Color = Color::rgba(36, 65, 122, 255);
pub const BUS4: Color = Color::rgba(37, 98, 122, 255);
pub const BUS5: Color = Color::rgba(122, 45, 102, 255);
pub const BUS6: Color = Color::rgba(122, 112, 36, 255);

pub const WRITE: Color = Color::rgba(77, 56, 62, 255);
pub const READ: Color = Color::rgba(46, 71, 93, 255);

pub const TRACE1: Color = Color::rgba(42, 53, 65, 255);
pub const TRACE2: Color = Color::rgba(159, 168, 174, 255);
pub const TRACE3: Color = Color::rgba(161, 85, 94, 255);
pub const TRACE4: Color = Color::rgba(161, 108, 86, 255);
pub const TRACE5: Color = Color::rgba(161, 133, 86, 255);
pub const TRACE6: Color = Color::rgba(161, 152, 86, 255);
pub const TRACE7: Color = Color::rgba(153, 161, 86, 255);
pub const TRACE8: Color = Color::rgba(136, 161, 86, 255);
pub const TRACE9: Color = Color::rgba(108, 161, 86, 255);
pub const TRACE10: Color = Color::rgba(86, 161, 141, 255);
pub const TRACE11: Color = Color::rgba(86, 147, 161, 255);
pub const TRACE12: Color = Color::rgba(86, 123, 161, 255);
pub const TRACE13: Color = Color::rgba(86, 98, 161, 255);
pub const TRACE14: Color = Color::rgba(102, 86, 161, 255);
pub const TRACE15: Color = Color::rgba(135, 86, 161, 255);
pub const TRACE16: Color = Color::rgba(161, 85, 151, 255);

pub const BUFFER: Color = Color::rgba(146, 255, 99, 255);
pub const AND: Color = Color::rgba(255, 198, 99, 255);
pub const OR: Color = Color::rgba(99, 242, 255, 255);
pub const XOR: Color = Color::rgba(174, 116, 255, 255);
pub const NOT: Color = Color::rgba(255, 98, 138, 255);
pub const NAND: Color = Color::rgba(255, 162, 0, 255);
pub const NOR: Color = Color::rgba(48, 217, 255, 255);
pub const XNOR: Color = Color::rgba(166, 0, 255, 255);

pub const LATCH_ON: Color = Color::rgba(99, 255, 159, 255);
pub const LATCH_OFF: Color = Color::rgba(56, 77, 71, 255);
pub const CLOCK: Color = Color::rgba(255, 0, 65, 255);
pub const LED: Color = Color::rgba(255, 255, 255, 255);
pub const TIMER: Color = Color::rgba(255, 103, 0, 255);
pub const RANDOM: Color = Color::rgba(229, 255, 0, 255);
pub const BREAK: Color = Color::rgba(224, 0, 0, 255);

pub const WIFI0: Color = Color::rgba(255, 0, 191, 255);
pub const WIFI1: Color = Color::rgba(255, 0, 175, 255);
pub const WIFI2: Color = Color::rgba(255, 0, 159, 255);
pub const WIFI3: Color = Color::rgba(255, 0, 143, 255);

pub const ANNOTATION: Color = Color::rgba(58, 69, 81, 255);
pub const FILLER: Color = Color::rgba(140, 171, 161, 255);
pub const EMPTY: Color = Color::rgba(0, 0, 0, 0);
