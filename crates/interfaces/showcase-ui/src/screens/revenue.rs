use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::{Route, ShowcaseApplication};

/// Final walkthrough step: a recap of everything built so far, handing off to
/// the growth calculator.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| crate::utils::section_label(ui, "YOUR MARKETPLACE IS READY"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            padding: length(4.0),
            size: taffy::Size {
                width: percent(1.),
                height: length(52.0),
            },
            align_items: Some(taffy::AlignItems::Stretch),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_DARK)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                draw_cell(
                    &mut *tui,
                    "INSTALLED",
                    &app.state.downloads.installed_count().to_string(),
                );
                draw_cell(
                    &mut *tui,
                    "LISTED",
                    &app.state.tour.selected_apps.len().to_string(),
                );
                draw_cell(
                    &mut *tui,
                    "CUSTOM",
                    if app.state.tour.custom_app_created { "1" } else { "0" },
                );
            },
        );

        tui.label(
            egui::RichText::new("Marketplaces like this typically grow revenue 1x to 4.9x.")
                .size(11.0)
                .color(COL_TEXT),
        );
        tui.label(
            egui::RichText::new("See how far software can multiply yours.")
                .size(10.0)
                .color(COL_TEXT_DIM),
        );

        if tui
            .ui(|ui| cmd_button(ui, "OPEN GROWTH CALCULATOR", "primary", true))
            .clicked()
        {
            app.navigate(Route::Growth);
        }
    });
}

fn draw_cell<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        gap: length(2.0),
        justify_content: Some(taffy::JustifyContent::Center),
        padding: length(4.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(label)
                .size(9.0)
                .color(COL_TEXT_DIM)
                .strong(),
        );
        tui.label(
            egui::RichText::new(value)
                .size(12.0)
                .color(COL_ACCENT)
                .monospace(),
        );
    });
}
