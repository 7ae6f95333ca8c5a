use crate::components::progress;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::viewmodel::{self, VersionsVm};
use showcase_app_core::ShowcaseApplication;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    let vm = viewmodel::versions_vm(&app.state);

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
        tui.ui(|ui| crate::utils::section_label(ui, "VERSION MANAGEMENT"));

        match vm {
            VersionsVm::NothingSelected => {
                tui.colored_label(COL_TEXT_DIM, "Download an app first to manage its versions.");
            }
            VersionsVm::UnknownApp(id) => {
                tui.colored_label(COL_ERROR, format!("App '{id}' is not in the catalog."));
            }
            VersionsVm::Ready {
                app_name,
                current_version,
                options,
                progress: prog,
                can_start,
                can_choose,
            } => {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    justify_content: Some(taffy::JustifyContent::SpaceBetween),
                    align_items: Some(taffy::AlignItems::Center),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(app_name).size(13.0).strong().color(COL_TEXT),
                    );
                    tui.label(
                        egui::RichText::new(format!("INSTALLED: v{current_version}"))
                            .size(10.0)
                            .color(COL_TEXT_DIM),
                    );
                });

                let mut chosen = None;
                for opt in &options {
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
                            .with_border_color(if opt.is_chosen { COL_ACCENT } else { COL_BORDER })
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
                                    egui::RichText::new(format!("v{}", opt.version))
                                        .size(12.0)
                                        .color(COL_TEXT)
                                        .monospace(),
                                );
                                tui.label(
                                    egui::RichText::new(opt.channel_label)
                                        .size(9.0)
                                        .color(COL_TEXT_DIM),
                                );
                                if opt.is_current {
                                    tui.label(
                                        egui::RichText::new("CURRENT").size(9.0).color(COL_SUCCESS),
                                    );
                                }
                            });

                            let label = if opt.is_chosen { "SELECTED" } else { "SELECT" };
                            if tui
                                .ui(|ui| cmd_button(ui, label, "outline", can_choose && !opt.is_chosen))
                                .clicked()
                            {
                                chosen = Some(opt.version);
                            }
                        },
                    );
                }
                if let Some(version) = chosen {
                    app.choose_version(version);
                }

                if prog.running || prog.complete {
                    progress::draw(&mut *tui, "UPDATE", prog);
                }

                if tui
                    .ui(|ui| cmd_button(ui, "START UPDATE", "primary", can_start))
                    .clicked()
                {
                    if let Err(e) = app.start_version_update() {
                        tracing::warn!("Update rejected: {e}");
                    }
                }
            }
        }
    });
}
