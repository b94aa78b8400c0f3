//! To keep the terminal output consistent, the theme colors live here as
//! constants.
//!
//! - QB_BLUE: Main Color

use colored::Color;

pub(crate) const QB_BLUE: Color = Color::TrueColor {
    r: 87,
    g: 160,
    b: 255,
};
