// Text grid for a single bar

use strum_core::{GlyphStyle, Pattern, SlotIndex, Symbol, SLOTS_PER_BAR};

const BORDER: &str = "+-------+-------+-------+-------+-------+-------+-------+-------+";

/// Two-column glyph shown for a symbol
///
/// Every glyph occupies two terminal columns so cells stay aligned.
pub fn glyph(symbol: Symbol, style: GlyphStyle) -> &'static str {
    match (style, symbol) {
        (GlyphStyle::Emoji, Symbol::Down) => "🔽",
        (GlyphStyle::Emoji, Symbol::Up) => "🔼",
        (GlyphStyle::Ascii, Symbol::Down) => "v ",
        (GlyphStyle::Ascii, Symbol::Up) => "^ ",
        (_, Symbol::Pause) => "  ",
        (_, Symbol::Mute) => "X ",
    }
}

/// Render a pattern with the default emoji glyphs
pub fn render(pattern: &Pattern) -> String {
    render_with(pattern, GlyphStyle::default())
}

pub fn render_with(pattern: &Pattern, style: GlyphStyle) -> String {
    render_symbols(pattern.slots(), style)
}

/// Render a raw slice of symbols
///
/// # Panics
///
/// Panics unless `symbols` holds exactly one symbol per slot.
pub fn render_symbols(symbols: &[Symbol], style: GlyphStyle) -> String {
    assert_eq!(
        symbols.len(),
        SLOTS_PER_BAR,
        "a bar has exactly {} slots",
        SLOTS_PER_BAR
    );

    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');

    out.push('|');
    for slot in SlotIndex::ALL {
        out.push_str(&format!("   {}   |", slot.label()));
    }
    out.push('\n');

    out.push_str(BORDER);
    out.push('\n');

    out.push('|');
    for &symbol in symbols {
        out.push_str(&format!("   {}  |", glyph(symbol, style)));
    }
    out.push('\n');

    out.push_str(BORDER);
    out.push('\n');
    out
}
