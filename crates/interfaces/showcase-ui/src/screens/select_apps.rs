use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::ShowcaseApplication;
use showcase_core::catalog::STARTER_PACK;
use showcase_core::tour::StepId;

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
        tui.ui(|ui| crate::utils::section_label(ui, "STARTER PACK"));
        tui.label(
            egui::RichText::new("Pick the apps your marketplace opens with.")
                .size(10.0)
                .color(COL_TEXT_DIM),
        );

        let mut toggled = None;
        for starter in &STARTER_PACK {
            let selected = app
                .state
                .tour
                .selected_apps
                .iter()
                .any(|id| id == starter.id);

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                padding: length(6.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_BG_DARK)
                    .with_border_color(if selected { COL_ACCENT } else { COL_BORDER })
                    .with_border_width(1.0),
                |tui| {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        gap: length(2.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new(starter.name)
                                .size(12.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(starter.blurb).size(10.0).color(COL_TEXT_DIM),
                        );
                    });

                    let label = if selected { "REMOVE" } else { "ADD" };
                    if tui.ui(|ui| cmd_button(ui, label, "outline", true)).clicked() {
                        toggled = Some(starter.id);
                    }
                },
            );
        }
        if let Some(id) = toggled {
            app.toggle_starter_app(id);
        }

        let count = app.state.tour.selected_apps.len();
        tui.label(
            egui::RichText::new(format!("{count} selected"))
                .size(10.0)
                .color(COL_TEXT_DIM),
        );

        if tui
            .ui(|ui| cmd_button(ui, "CONTINUE", "primary", count > 0))
            .clicked()
        {
            app.complete_step(StepId::SelectApps);
        }
    });
}
