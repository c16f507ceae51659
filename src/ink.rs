//! Ink → [`InkKind`] mapping and the kind predicates the rest of the compiler
//! is built on.
//!
//! The category scheme mirrors the reference tool's bit-packed `Component`
//! id exactly: `Category` only distinguishes *bus-ness* and *trace-ness*, not
//! individual colors, so by design every bus color shares one category and
//! every trace color (`Write`, `Read`, `Trace1..16`) shares another. Gates and
//! other active components carry category 0 and merge only on exact kind
//! equality. Don't "fix" this into per-color categories — it's load-bearing
//! for local same-family merging (see `same_family`).

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InkKind {
    Empty,
    Cross,
    Tunnel,
    Mesh,
    Bus1,
    Bus2,
    Bus3,
    Bus4,
    Bus5,
    Bus6,
    Write,
    Read,
    Trace1,
    Trace2,
    Trace3,
    Trace4,
    Trace5,
    Trace6,
    Trace7,
    Trace8,
    Trace9,
    Trace10,
    Trace11,
    Trace12,
    Trace13,
    Trace14,
    Trace15,
    Trace16,
    Buffer,
    And,
    Or,
    Nor,
    Not,
    Nand,
    Xor,
    Xnor,
    LatchOn,
    LatchOff,
    Clock,
    LED,
    Timer,
    Random,
    Break,
    Wifi0,
    Wifi1,
    Wifi2,
    Wifi3,
}

/// Non-zero family ids used by [`InkKind::category`]. Any two kinds sharing a
/// non-zero category are "same family" for local merging purposes.
const CATEGORY_BUS: u16 = 1;
const CATEGORY_TRACE: u16 = 2;

impl InkKind {
    pub const fn is_empty(self) -> bool {
        matches!(self, InkKind::Empty)
    }

    pub const fn is_cross(self) -> bool {
        matches!(self, InkKind::Cross)
    }

    pub const fn is_tunnel(self) -> bool {
        matches!(self, InkKind::Tunnel)
    }

    pub const fn is_mesh(self) -> bool {
        matches!(self, InkKind::Mesh)
    }

    pub const fn is_bus(self) -> bool {
        matches!(
            self,
            InkKind::Bus1
                | InkKind::Bus2
                | InkKind::Bus3
                | InkKind::Bus4
                | InkKind::Bus5
                | InkKind::Bus6
        )
    }

    pub const fn is_trace(self) -> bool {
        matches!(
            self,
            InkKind::Write
                | InkKind::Read
                | InkKind::Trace1
                | InkKind::Trace2
                | InkKind::Trace3
                | InkKind::Trace4
                | InkKind::Trace5
                | InkKind::Trace6
                | InkKind::Trace7
                | InkKind::Trace8
                | InkKind::Trace9
                | InkKind::Trace10
                | InkKind::Trace11
                | InkKind::Trace12
                | InkKind::Trace13
                | InkKind::Trace14
                | InkKind::Trace15
                | InkKind::Trace16
        )
    }

    pub const fn is_read(self) -> bool {
        matches!(self, InkKind::Read)
    }

    pub const fn is_write(self) -> bool {
        matches!(self, InkKind::Write)
    }

    pub const fn is_wifi(self) -> bool {
        matches!(
            self,
            InkKind::Wifi0 | InkKind::Wifi1 | InkKind::Wifi2 | InkKind::Wifi3
        )
    }

    pub const fn is_latch(self) -> bool {
        matches!(self, InkKind::LatchOn | InkKind::LatchOff)
    }

    pub const fn is_led(self) -> bool {
        matches!(self, InkKind::LED)
    }

    /// Whether this kind is an *active* component: it drives or reads a
    /// signal as part of its enclosing circuit (gates, latches, clock, LED,
    /// timer, random, break, wifi).
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            InkKind::Buffer
                | InkKind::And
                | InkKind::Or
                | InkKind::Nor
                | InkKind::Not
                | InkKind::Nand
                | InkKind::Xor
                | InkKind::Xnor
                | InkKind::LatchOn
                | InkKind::LatchOff
                | InkKind::Clock
                | InkKind::LED
                | InkKind::Timer
                | InkKind::Random
                | InkKind::Break
                | InkKind::Wifi0
                | InkKind::Wifi1
                | InkKind::Wifi2
                | InkKind::Wifi3
        )
    }

    /// Non-zero family id for same-family local merging; 0 means "no family"
    /// (only exact kind equality merges).
    pub const fn category(self) -> u16 {
        if self.is_bus() {
            CATEGORY_BUS
        } else if self.is_trace() {
            CATEGORY_TRACE
        } else {
            0
        }
    }

    /// Wireless channel index for Wifi kinds, `None` otherwise.
    pub const fn wireless_channel(self) -> Option<u8> {
        match self {
            InkKind::Wifi0 => Some(0),
            InkKind::Wifi1 => Some(1),
            InkKind::Wifi2 => Some(2),
            InkKind::Wifi3 => Some(3),
            _ => None,
        }
    }

    /// Human-readable kind name, used as the default GraphViz node label.
    pub const fn desc(self) -> &'static str {
        match self {
            InkKind::Empty => "Empty",
            InkKind::Cross => "Cross",
            InkKind::Tunnel => "Tunnel",
            InkKind::Mesh => "Mesh",
            InkKind::Bus1 => "Bus1",
            InkKind::Bus2 => "Bus2",
            InkKind::Bus3 => "Bus3",
            InkKind::Bus4 => "Bus4",
            InkKind::Bus5 => "Bus5",
            InkKind::Bus6 => "Bus6",
            InkKind::Write | InkKind::Read => "Trace",
            InkKind::Trace1
            | InkKind::Trace2
            | InkKind::Trace3
            | InkKind::Trace4
            | InkKind::Trace5
            | InkKind::Trace6
            | InkKind::Trace7
            | InkKind::Trace8
            | InkKind::Trace9
            | InkKind::Trace10
            | InkKind::Trace11
            | InkKind::Trace12
            | InkKind::Trace13
            | InkKind::Trace14
            | InkKind::Trace15
            | InkKind::Trace16 => "Trace",
            InkKind::Buffer => "Buffer",
            InkKind::And => "And",
            InkKind::Or => "Or",
            InkKind::Nor => "Nor",
            InkKind::Not => "Not",
            InkKind::Nand => "Nand",
            InkKind::Xor => "Xor",
            InkKind::Xnor => "Xnor",
            InkKind::LatchOn => "LatchOn",
            InkKind::LatchOff => "LatchOff",
            InkKind::Clock => "Clock",
            InkKind::LED => "LED",
            InkKind::Timer => "Timer",
            InkKind::Random => "Random",
            InkKind::Break => "Break",
            InkKind::Wifi0 => "Wifi0",
            InkKind::Wifi1 => "Wifi1",
            InkKind::Wifi2 => "Wifi2",
            InkKind::Wifi3 => "Wifi3",
        }
    }

    /// IEC 60617-style symbol label, used by GraphViz emission when
    /// `GraphSettings.iec_symbols` is set. Falls back to [`InkKind::desc`]
    /// for kinds with no standard gate symbol.
    pub const fn iec_label(self) -> &'static str {
        match self {
            InkKind::Buffer => "1",
            InkKind::And => "&",
            InkKind::Or => "\u{2265}1",
            InkKind::Nor => "\u{2265}1 \u{25E6}",
            InkKind::Not => "1 \u{25E6}",
            InkKind::Nand => "& \u{25E6}",
            InkKind::Xor => "=1",
            InkKind::Xnor => "=1 \u{25E6}",
            other => other.desc(),
        }
    }
}

/// Same-family test used by the local merge rule: identical kind, or both
/// kinds carry an equal non-zero category.
pub const fn same_family(a: InkKind, b: InkKind) -> bool {
    if a as u8 == b as u8 {
        return true;
    }
    let ca = a.category();
    let cb = b.category();
    ca != 0 && ca == cb
}

/// Dense, total, side-effect-free ink palette lookup. Any color not in the
/// table (including `Annotation` and `Filler`, which are recognized but
/// compiler-transparent) maps to `InkKind::Empty`.
pub fn ink_from_color(c: Color) -> InkKind {
    use InkKind::*;
    match (c.r, c.g, c.b, c.a) {
        (102, 120, 142, 255) => Cross,
        (83, 85, 114, 255) => Tunnel,
        (100, 106, 87, 255) => Mesh,
        (122, 47, 36, 255) => Bus1,
        (62, 122, 36, 255) => Bus2,
        (36, 65, 122, 255) => Bus3,
        (37, 98, 122, 255) => Bus4,
        (122, 45, 102, 255) => Bus5,
        (122, 112, 36, 255) => Bus6,
        (77, 56, 62, 255) => Write,
        (46, 71, 93, 255) => Read,
        (42, 53, 65, 255) => Trace1,
        (159, 168, 174, 255) => Trace2,
        (161, 85, 94, 255) => Trace3,
        (161, 108, 86, 255) => Trace4,
        (161, 133, 86, 255) => Trace5,
        (161, 152, 86, 255) => Trace6,
        (153, 161, 86, 255) => Trace7,
        (136, 161, 86, 255) => Trace8,
        (108, 161, 86, 255) => Trace9,
        (86, 161, 141, 255) => Trace10,
        (86, 147, 161, 255) => Trace11,
        (86, 123, 161, 255) => Trace12,
        (86, 98, 161, 255) => Trace13,
        (102, 86, 161, 255) => Trace14,
        (135, 86, 161, 255) => Trace15,
        (161, 85, 151, 255) => Trace16,
        (146, 255, 99, 255) => Buffer,
        (255, 198, 99, 255) => And,
        (99, 242, 255, 255) => Or,
        (174, 116, 255, 255) => Xor,
        (255, 98, 138, 255) => Not,
        (255, 162, 0, 255) => Nand,
        (48, 217, 255, 255) => Nor,
        (166, 0, 255, 255) => Xnor,
        (99, 255, 159, 255) => LatchOn,
        (56, 77, 71, 255) => LatchOff,
        (255, 0, 65, 255) => Clock,
        (255, 255, 255, 255) => LED,
        (255, 103, 0, 255) => Timer,
        (229, 255, 0, 255) => Random,
        (224, 0, 0, 255) => Break,
        (255, 0, 191, 255) => Wifi0,
        (255, 0, 175, 255) => Wifi1,
        (255, 0, 159, 255) => Wifi2,
        (255, 0, 143, 255) => Wifi3,
        // Annotation and Filler are recognized inks but collapse to Empty.
        (58, 69, 81, 255) => Empty,
        (140, 171, 161, 255) => Empty,
        (0, 0, 0, 0) => Empty,
        _ => Empty,
    }
}
