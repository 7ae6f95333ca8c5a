use crate::components::forms::text_field;
use crate::theme::*;
use crate::utils::{brand_color_or_accent, cmd_button};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use showcase_app_core::{viewmodel, ShowcaseApplication};
use showcase_core::tour::StepId;

/// Live preview of the visitor's branded storefront, shared by the store and
/// branding steps.
pub fn draw_preview<'a>(tui: impl TuiBuilderLogic<'a>, app: &ShowcaseApplication) {
    let vm = viewmodel::store_preview_vm(&app.state);
    let brand = brand_color_or_accent(&vm.brand_color);

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
            .with_border_color(brand)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                if let Some(glyph) = vm.logo_glyph {
                    tui.label(egui::RichText::new(glyph).size(16.0));
                }
                tui.label(
                    egui::RichText::new(&vm.company_label)
                        .size(14.0)
                        .strong()
                        .color(brand),
                );
            });

            if vm.listings.is_empty() {
                tui.label(
                    egui::RichText::new("No apps listed yet")
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
            } else {
                for listing in &vm.listings {
                    tui.label(
                        egui::RichText::new(format!("▸ {listing}"))
                            .size(11.0)
                            .color(COL_TEXT),
                    );
                }
            }
        },
    );
}

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
        tui.ui(|ui| crate::utils::section_label(ui, "YOUR STORE"));

        text_field(
            &mut *tui,
            "COMPANY NAME",
            &mut app.state.tour.company_name,
            "Acme Industrial",
        );

        draw_preview(&mut *tui, app);

        let can_continue = viewmodel::store_preview_vm(&app.state).can_continue;
        if tui
            .ui(|ui| cmd_button(ui, "CONTINUE", "primary", can_continue))
            .clicked()
        {
            app.complete_step(StepId::Store);
        }
    });
}
