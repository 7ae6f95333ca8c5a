use crate::components::forms::text_field;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::viewmodel::{self, GrowthVm};
use showcase_app_core::ShowcaseApplication;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    let vm = viewmodel::growth_vm(&app.state);

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
        tui.ui(|ui| crate::utils::section_label(ui, "GROWTH CALCULATOR"));

        text_field(
            &mut *tui,
            "ANNUAL REVENUE (USD)",
            &mut app.state.roi.revenue_input,
            "100,000",
        );

        if tui
            .ui(|ui| cmd_button(ui, "PROJECT GROWTH", "primary", vm.can_start))
            .clicked()
        {
            if let Err(e) = app.start_roi() {
                tracing::warn!("Projection rejected: {e}");
                app.report_error(e.to_string());
            }
        }

        if let Some(err) = &vm.error {
            tui.colored_label(COL_ERROR, err);
        }

        draw_stage(&mut *tui, &vm);
        draw_projection(&mut *tui, &vm);
    });
}

fn draw_stage<'a>(tui: impl TuiBuilderLogic<'a>, vm: &GrowthVm) {
    let Some(stage) = &vm.stage else {
        return;
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(6.0),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(if vm.is_animating { COL_BUSY } else { COL_BORDER })
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(&stage.title).size(13.0).strong().color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new(&stage.multiplier_label)
                        .size(14.0)
                        .strong()
                        .color(COL_ACCENT)
                        .monospace(),
                );
            });

            tui.label(
                egui::RichText::new(&stage.description)
                    .size(10.0)
                    .color(COL_TEXT_DIM),
            );

            tui.ui_add(
                egui::ProgressBar::new(stage.fraction)
                    .desired_height(8.0)
                    .fill(if vm.is_animating { COL_BUSY } else { COL_SUCCESS }),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(12.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    flex_grow: 1.0,
                    gap: length(2.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui(|ui| crate::utils::section_label(ui, "UNLOCKED"));
                    for feature in &stage.features {
                        tui.label(
                            egui::RichText::new(format!("▸ {feature}"))
                                .size(10.0)
                                .color(COL_TEXT),
                        );
                    }
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    flex_grow: 1.0,
                    gap: length(2.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui(|ui| crate::utils::section_label(ui, stage.bucket_label));
                    for feature in &stage.bucket_features {
                        tui.label(
                            egui::RichText::new(format!("▸ {feature}"))
                                .size(10.0)
                                .color(COL_TEXT_DIM),
                        );
                    }
                });
            });
        },
    );
}

fn draw_projection<'a>(tui: impl TuiBuilderLogic<'a>, vm: &GrowthVm) {
    let Some(p) = &vm.projection else {
        return;
    };

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
            draw_cell(&mut *tui, "BASE", &p.base, COL_TEXT);
            draw_cell(&mut *tui, "ADDITIONAL", &p.additional, COL_SUCCESS);
            draw_cell(&mut *tui, "COST", &p.cost, COL_WARN);
            draw_cell(&mut *tui, "PROJECTED", &p.projected, COL_ACCENT);
            draw_cell(&mut *tui, "ROI", &p.roi_percent, COL_SUCCESS);
        },
    );
}

fn draw_cell<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &str, color: egui::Color32) {
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
        tui.label(egui::RichText::new(value).size(12.0).color(color).monospace());
    });
}
