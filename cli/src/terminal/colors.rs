use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 200, b: 120 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 200, g: 200, b: 200 };
pub const HOST: Color = Color::TrueColor { r: 120, g: 170, b: 240 };
pub const FAILURE: Color = Color::Red;
pub const MUTED: Color = Color::TrueColor { r: 130, g: 130, b: 130 };
