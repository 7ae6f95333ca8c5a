use crate::components::progress;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::{viewmodel, ShowcaseApplication};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    let vm = viewmodel::download_vm(&app.state);

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
        tui.ui(|ui| crate::utils::section_label(ui, "FEATURED APPS"));

        for card in &vm.apps {
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
                    .with_border_color(COL_BORDER)
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
                            egui::RichText::new(card.name)
                                .size(13.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(format!("v{}", card.version))
                                .size(10.0)
                                .color(COL_TEXT_DIM),
                        );
                    });

                    tui.label(egui::RichText::new(card.blurb).size(10.0).color(COL_TEXT_DIM));

                    if let Some(p) = card.progress {
                        progress::draw(&mut *tui, "DOWNLOAD", p);
                    }

                    if card.is_installed {
                        tui.label(
                            egui::RichText::new("INSTALLED")
                                .size(10.0)
                                .color(COL_SUCCESS),
                        );
                    } else if tui
                        .ui(|ui| cmd_button(ui, "DOWNLOAD", "primary", card.can_start))
                        .clicked()
                    {
                        if let Err(e) = app.start_download(card.id) {
                            tracing::warn!("Download rejected: {e}");
                        }
                    }
                },
            );
        }

        if vm.installed_count > 0 {
            tui.label(
                egui::RichText::new(format!("{} app(s) installed", vm.installed_count))
                    .size(10.0)
                    .color(COL_TEXT_DIM),
            );
        }
    });
}
