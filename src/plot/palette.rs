// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::style::RGBColor;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

/// Trace colours, in trace order
pub const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x117733),
    hexcolour!(0x888888),
    hexcolour!(0xDDCC77),
    hexcolour!(0x332288),
];

/// Colour for the trace at `index`, cycling through the palette
pub fn colour(index: usize) -> RGBColor {
    COLOURS[index % COLOURS.len()]
}
