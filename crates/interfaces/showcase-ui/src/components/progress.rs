use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::SlotProgress;

/// One labelled progress row for a simulated operation.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, progress: SlotProgress) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(egui::RichText::new(label).size(10.0).color(COL_TEXT_DIM));
            let (status, color) = if progress.complete {
                ("DONE", COL_SUCCESS)
            } else if progress.running {
                ("RUNNING", COL_BUSY)
            } else {
                ("WAITING", COL_TEXT_DIM)
            };
            tui.label(
                egui::RichText::new(format!("{status} {:>3.0}%", progress.percent))
                    .size(10.0)
                    .color(color),
            );
        });

        tui.ui_add(
            egui::ProgressBar::new(progress.percent / 100.0)
                .desired_height(8.0)
                .fill(if progress.complete { COL_SUCCESS } else { COL_ACCENT }),
        );
    });
}
