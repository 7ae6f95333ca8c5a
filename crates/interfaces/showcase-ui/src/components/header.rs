use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::Route;

pub struct HeaderResponse {
    pub route_clicked: Option<Route>,
}

fn tab<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, active: bool) -> bool {
    let color = if active { COL_ACCENT } else { COL_TEXT_DIM };
    tui.ui(|ui| {
        ui.add(
            egui::Button::new(egui::RichText::new(label).size(10.0).color(color))
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(1.0, if active { COL_ACCENT } else { COL_BORDER }))
                .min_size(egui::vec2(90.0, 22.0)),
        )
    })
    .clicked()
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, route: Route, is_busy: bool) -> HeaderResponse {
    let mut route_clicked = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("MARKETPLACE")
                        .family(egui::FontFamily::Monospace)
                        .size(12.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_TEXT),
                );

                if tab(&mut *tui, "TOUR", route == Route::Tour) {
                    route_clicked = Some(Route::Tour);
                }
                if tab(&mut *tui, "GROWTH", route == Route::Growth) {
                    route_clicked = Some(Route::Growth);
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(
                        egui::RichText::new("STATUS: SIMULATING")
                            .color(COL_WARN)
                            .size(10.0),
                    );
                } else {
                    tui.label(
                        egui::RichText::new("STATUS: IDLE")
                            .color(COL_ACCENT)
                            .size(10.0),
                    );
                }
            });
        },
    );

    HeaderResponse { route_clicked }
}
