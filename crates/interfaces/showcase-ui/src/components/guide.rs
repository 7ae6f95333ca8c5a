use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::viewmodel::GuideVm;

pub struct GuideResponse {
    pub jump_clicked: Option<usize>,
}

/// Step strip above the tour screens. Done steps are clickable for review;
/// steps ahead of the walkthrough stay inert.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &GuideVm) -> GuideResponse {
    let mut jump_clicked = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
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
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                gap: length(4.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(4.0),
                    ..Default::default()
                })
                .add(|tui| {
                    for step in &vm.steps {
                        let marker = if step.is_done {
                            "●"
                        } else if step.is_current {
                            "◉"
                        } else {
                            "○"
                        };
                        let color = if step.is_current {
                            COL_ACCENT
                        } else if step.is_done {
                            COL_SUCCESS
                        } else {
                            COL_TEXT_DIM
                        };
                        let label = format!("{marker} {}", step.index + 1);

                        let resp = tui.ui(|ui| {
                            ui.add_enabled(
                                step.can_jump,
                                egui::Button::new(
                                    egui::RichText::new(label).size(10.0).color(color),
                                )
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::new(
                                    1.0,
                                    if step.is_current { COL_ACCENT } else { COL_BORDER },
                                )),
                            )
                        });
                        if resp.clicked() {
                            jump_clicked = Some(step.index);
                        }
                    }
                });

                tui.label(
                    egui::RichText::new(&vm.company_label)
                        .size(10.0)
                        .strong()
                        .color(COL_TEXT_DIM),
                );
            });

            tui.label(
                egui::RichText::new(vm.current_title)
                    .size(13.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(vm.current_description)
                    .size(10.0)
                    .color(COL_TEXT_DIM),
            );
        },
    );

    GuideResponse { jump_clicked }
}
