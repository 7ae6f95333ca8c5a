use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

/// Small dim caption above a form field or panel section.
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

/// Action button in one of three variants: "primary" (filled accent),
/// "outline", or "danger". Wide enough for the walkthrough's longer labels.
pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_BG_DARK),
        "danger" => (COL_DANGER, COL_DANGER),
        _ => (COL_ACCENT, COL_ACCENT),
    };

    let filled = enabled && variant == "primary";
    let text =
        egui::RichText::new(label)
            .size(10.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 24.0))
        .fill(if filled { COL_ACCENT } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Lenient `#RRGGBB` parser for the brand color field. Anything that does
/// not parse renders as the brand accent instead of failing.
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().strip_prefix('#')?;
    // The field is free text; multibyte input must not land in the slicing.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

pub fn brand_color_or_accent(value: &str) -> Color32 {
    parse_hex_color(value).unwrap_or(COL_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_is_lenient() {
        assert_eq!(
            parse_hex_color("#6366f1"),
            Some(Color32::from_rgb(0x63, 0x66, 0xf1))
        );
        assert_eq!(
            parse_hex_color("  #FF2E63 "),
            Some(Color32::from_rgb(0xFF, 0x2E, 0x63))
        );
        assert_eq!(parse_hex_color("6366f1"), None);
        assert_eq!(parse_hex_color("#66f"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(brand_color_or_accent("not a color"), COL_ACCENT);
    }

    #[test]
    fn multibyte_input_is_rejected_not_sliced() {
        // 6 bytes but not 6 ASCII digits; slicing these at fixed byte
        // offsets would split a character.
        assert_eq!(parse_hex_color("#zффz"), None);
        assert_eq!(parse_hex_color("#ффф"), None);
        assert_eq!(brand_color_or_accent("#zффz"), COL_ACCENT);
    }
}
