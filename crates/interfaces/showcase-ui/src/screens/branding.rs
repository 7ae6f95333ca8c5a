use crate::components::forms::text_field;
use crate::screens::store;
use crate::theme::*;
use crate::utils::{cmd_button, parse_hex_color};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::{BrandingPhase, ShowcaseApplication};
use showcase_core::catalog::{LogoChoice, PRESET_COLORS};
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
    .add(|tui| match app.state.tour.branding_phase {
        BrandingPhase::Logo => draw_logo_phase(&mut *tui, app),
        BrandingPhase::Color => draw_color_phase(&mut *tui, app),
    });
}

fn draw_logo_phase<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| crate::utils::section_label(ui, "PICK A LOGO"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            for choice in LogoChoice::ALL {
                let selected = app.state.tour.logo_choice == Some(choice);
                let resp = tui.ui(|ui| {
                    ui.add(
                        egui::Button::new(
                            egui::RichText::new(format!("{} {}", choice.glyph(), choice.label()))
                                .size(12.0)
                                .color(if selected { COL_ACCENT } else { COL_TEXT }),
                        )
                        .min_size(egui::vec2(110.0, 40.0))
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::new(
                            1.0,
                            if selected { COL_ACCENT } else { COL_BORDER },
                        )),
                    )
                });
                if resp.clicked() {
                    app.choose_logo(choice);
                }
            }
        });

        let can_continue = app.state.tour.logo_choice.is_some();
        if tui
            .ui(|ui| cmd_button(ui, "NEXT: COLORS", "primary", can_continue))
            .clicked()
        {
            app.advance_branding();
        }
    });
}

fn draw_color_phase<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut ShowcaseApplication) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| crate::utils::section_label(ui, "PICK A BRAND COLOR"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(6.0),
            ..Default::default()
        })
        .add(|tui| {
            let mut picked = None;
            for preset in &PRESET_COLORS {
                let color = parse_hex_color(preset.value).unwrap_or(COL_ACCENT);
                let selected = app.state.tour.brand_color.eq_ignore_ascii_case(preset.value);
                let resp = tui.ui(|ui| {
                    ui.add(
                        egui::Button::new(egui::RichText::new(preset.name).size(9.0).color(color))
                            .min_size(egui::vec2(90.0, 28.0))
                            .fill(color.linear_multiply(0.12))
                            .stroke(egui::Stroke::new(
                                1.0,
                                if selected { color } else { COL_BORDER },
                            )),
                    )
                    .on_hover_text(preset.meaning)
                });
                if resp.clicked() {
                    picked = Some(preset.value);
                }
            }
            if let Some(value) = picked {
                app.set_brand_color(value);
            }
        });

        // Free-form entry; anything unparseable just previews as the default
        // accent.
        text_field(
            &mut *tui,
            "CUSTOM HEX",
            &mut app.state.tour.brand_color,
            showcase_config::DEFAULT_BRAND_COLOR,
        );

        store::draw_preview(&mut *tui, app);

        if tui
            .ui(|ui| cmd_button(ui, "CONTINUE", "primary", true))
            .clicked()
        {
            app.complete_step(StepId::Branding);
        }
    });
}
