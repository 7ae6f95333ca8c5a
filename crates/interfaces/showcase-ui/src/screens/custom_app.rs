use crate::components::forms::{multiline_field, text_field};
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::ShowcaseApplication;

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
        tui.ui(|ui| crate::utils::section_label(ui, "CREATE CUSTOM APP"));

        if app.state.tour.custom_app_created {
            tui.label(
                egui::RichText::new(format!(
                    "'{}' added to your marketplace.",
                    app.state.tour.custom_app_name.trim()
                ))
                .size(12.0)
                .color(COL_SUCCESS),
            );
            return;
        }

        text_field(
            &mut *tui,
            "APP NAME",
            &mut app.state.tour.custom_app_name,
            "My Industrial App",
        );
        multiline_field(
            &mut *tui,
            "DESCRIPTION",
            &mut app.state.tour.custom_app_blurb,
            "What does it do?",
        );

        let has_name = !app.state.tour.custom_app_name.trim().is_empty();
        if tui
            .ui(|ui| cmd_button(ui, "CREATE APP", "primary", has_name))
            .clicked()
        {
            if let Err(e) = app.create_custom_app() {
                tracing::warn!("Custom app rejected: {e}");
            }
        }
    });
}
