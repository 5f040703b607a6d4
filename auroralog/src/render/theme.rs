use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Aurora palette for the terminal skin.
pub struct Aurora;

impl Aurora {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Aurora::FG);
        skin.bold.set_fg(Aurora::FG);
        skin.italic.set_fg(Aurora::FG);

        // `### <timestamp>` block headers
        skin.headers[2].set_fg(Aurora::TEAL);
        skin.headers[2].add_attr(Attribute::Bold);

        skin.table.set_fg(Aurora::VIOLET);
        skin.bullet.set_fg(Aurora::GREEN);
        skin.inline_code.set_fg(Aurora::GREEN);
        skin.inline_code.set_bg(Aurora::BG);

        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x2E,
        g: 0x34,
        b: 0x40,
    }; // #2E3440
    pub const FG: Color = Color::Rgb {
        r: 0xD8,
        g: 0xDE,
        b: 0xE9,
    }; // #D8DEE9
    pub const TEAL: Color = Color::Rgb {
        r: 0x8F,
        g: 0xBC,
        b: 0xBB,
    }; // #8FBCBB
    pub const GREEN: Color = Color::Rgb {
        r: 0xA3,
        g: 0xBE,
        b: 0x8C,
    }; // #A3BE8C
    pub const VIOLET: Color = Color::Rgb {
        r: 0xB4,
        g: 0x8E,
        b: 0xAD,
    }; // #B48EAD
}
