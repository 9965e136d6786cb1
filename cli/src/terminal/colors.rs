use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0x5f, g: 0xd7, b: 0xaf };
pub const ACCENT: Color = Color::TrueColor { r: 0xff, g: 0xaf, b: 0x5f };
pub const SEPARATOR: Color = Color::TrueColor { r: 0x6c, g: 0x6c, b: 0x6c };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 0xd0, g: 0xd0, b: 0xd0 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 0x87, g: 0xaf, b: 0xff };
pub const URL: Color = Color::TrueColor { r: 0x87, g: 0xd7, b: 0x5f };
