use crate::components::{guide, header};
use crate::screens;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use showcase_app_core::{viewmodel, Route, ShowcaseApplication};
use showcase_core::tour::StepId;

pub struct ShowcaseUiApp {
    core: ShowcaseApplication,
}

impl ShowcaseUiApp {
    pub fn new(core: ShowcaseApplication) -> Self {
        Self { core }
    }
}

impl eframe::App for ShowcaseUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_sim_events();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap();
        });
        ctx.style_mut(|style| {
            // Global `Extend` keeps egui text measurement width-independent,
            // which egui_taffy's multi-pass layout needs.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(
                            tui,
                            self.core.state.route,
                            self.core.is_simulating(),
                        );
                        if let Some(route) = resp.route_clicked {
                            self.core.navigate(route);
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| match self.core.state.route {
                        Route::Tour => {
                            let vm = viewmodel::guide_vm(&self.core.state);
                            let resp = guide::draw(&mut *tui, &vm);
                            if let Some(index) = resp.jump_clicked {
                                self.core.jump_to_step(index);
                            }

                            match self.core.state.tour.cursor.current() {
                                StepId::Download => screens::download::draw(&mut *tui, &mut self.core),
                                StepId::Versions => screens::versions::draw(&mut *tui, &mut self.core),
                                StepId::Store => screens::store::draw(&mut *tui, &mut self.core),
                                StepId::Branding => screens::branding::draw(&mut *tui, &mut self.core),
                                StepId::SelectApps => {
                                    screens::select_apps::draw(&mut *tui, &mut self.core)
                                }
                                StepId::CustomApp => {
                                    screens::custom_app::draw(&mut *tui, &mut self.core)
                                }
                                StepId::Revenue => screens::revenue::draw(&mut *tui, &mut self.core),
                            }
                        }
                        Route::Growth => screens::growth::draw(&mut *tui, &mut self.core),
                    });
                });
        });

        if self.core.is_simulating() {
            ctx.request_repaint();
        }
    }
}
