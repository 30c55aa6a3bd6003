use chrono::{Local, Timelike};
use eframe::{egui, App, CreationContext, Frame};
use egui::{Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

mod builder;
mod catalog;
mod create_plan;
mod models;

use catalog::Catalog;
use create_plan::{CreatePlanScreen, PlanAction};
use models::Plan;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480 as f32, 860 as f32]),
        ..Default::default()
    };

    eframe::run_native(
        "My Workout",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)))),
    )
}

#[derive(PartialEq, Clone, Copy)]
enum Screen {
    Dashboard,
    CreatePlan,
}

struct PlannerApp {
    screen: Screen,
    drawer_open: bool,
    catalog: Catalog,
    saved_plans: Vec<Plan>,
    create_plan: CreatePlanScreen,
}

impl PlannerApp {
    fn new(cc: &CreationContext) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        PlannerApp {
            screen: Screen::Dashboard,
            drawer_open: false,
            catalog: Catalog::load(),
            saved_plans: Vec::new(),
            create_plan: CreatePlanScreen::new(),
        }
    }

    /// Route switch. Leaving the plan-creation screen discards its draft.
    fn navigate(&mut self, screen: Screen) {
        if self.screen == Screen::CreatePlan && screen != Screen::CreatePlan {
            self.create_plan = CreatePlanScreen::new();
        }
        self.screen = screen;
        self.drawer_open = false;
    }
}

impl App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("app_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("☰").size(18.0)).clicked() {
                    self.drawer_open = !self.drawer_open;
                }
                ui.label(RichText::new("My Workout").size(20.0).strong());
            });
        });

        egui::SidePanel::left("drawer")
            .resizable(false)
            .exact_width(250.0)
            .show_animated(ctx, self.drawer_open, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Menu").size(18.0).strong());
                ui.separator();
                if ui
                    .selectable_label(self.screen == Screen::Dashboard, "Dashboard")
                    .clicked()
                {
                    self.navigate(Screen::Dashboard);
                }
                if ui
                    .selectable_label(self.screen == Screen::CreatePlan, "Create New Plan")
                    .clicked()
                {
                    self.navigate(Screen::CreatePlan);
                }
            });

        let mut action = PlanAction::None;
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Dashboard => self.show_dashboard(ui),
            Screen::CreatePlan => {
                action = self.create_plan.show(ctx, ui, &self.catalog);
            }
        });

        match action {
            PlanAction::Back => self.navigate(Screen::Dashboard),
            PlanAction::Save(plan) => {
                self.saved_plans.push(plan);
                self.navigate(Screen::Dashboard);
            }
            PlanAction::None => {}
        }

        if self.screen == Screen::Dashboard {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}

impl PlannerApp {
    fn show_dashboard(&mut self, ui: &mut Ui) {
        let now = Local::now();
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(now.format("%H:%M:%S").to_string())
                    .size(40.0)
                    .strong(),
            );
            ui.label(RichText::new(greeting_for_hour(now.hour())).size(18.0));
            ui.add_space(16.0);

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.label(RichText::new("Today's Progress").size(18.0).strong());
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label("Your workout stats will appear here");
                });
                ui.add_space(14.0);

                ui.label(RichText::new("Recent Workouts").size(18.0).strong());
                if self.saved_plans.is_empty() {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.label("Your recent workouts will appear here");
                    });
                } else {
                    self.show_plan_table(ui);
                }
                ui.add_space(14.0);

                ui.label(RichText::new("Goals").size(18.0).strong());
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label("Your fitness goals will appear here");
                });
            });
        });
    }

    fn show_plan_table(&self, ui: &mut Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(70.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("Plan").strong());
                });
                header.col(|ui| {
                    ui.label(RichText::new("Sets").strong());
                });
                header.col(|ui| {
                    ui.label(RichText::new("Created").strong());
                });
            })
            .body(|mut body| {
                for plan in &self.saved_plans {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&plan.name);
                        });
                        row.col(|ui| {
                            ui.label(plan.sets.len().to_string());
                        });
                        row.col(|ui| {
                            ui.label(plan.created.format("%H:%M").to_string());
                        });
                    });
                }
            });
    }
}

fn greeting_for_hour(hour: u32) -> String {
    if hour >= 5 && hour < 12 {
        "Good morning, time to train".to_string()
    } else if hour >= 12 && hour < 19 {
        "Good afternoon, keep moving".to_string()
    } else {
        "Good night, rest up".to_string()
    }
}
