//! Entry point for the feedback pane demo window.

use eframe::egui;
use feedback_pane::config::{FeedbackConfig, ProjectInfo, RepoSlug};
use feedback_pane::logging;
use feedback_pane::pane::FeedbackPane;

/// Repository receiving demo submissions unless `FEEDBACK_REPO` overrides it.
const DEFAULT_REPO: &str = "example/feedback-submissions";

/// Contact channel offered when a submission fails.
const FALLBACK_EMAIL: &str = "feedback@example.org";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(760.0, 260.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Feedback pane",
        native_options,
        Box::new(|_cc| match DemoApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

fn demo_config() -> Result<FeedbackConfig, String> {
    let slug = std::env::var("FEEDBACK_REPO").unwrap_or_else(|_| DEFAULT_REPO.to_string());
    let repo = RepoSlug::parse(&slug).map_err(|err| err.to_string())?;
    let mut config = FeedbackConfig::new("feedback-pane demo", repo);
    config.project_info = ProjectInfo::new()
        .with("App version", env!("CARGO_PKG_VERSION"))
        .with("OS", std::env::consts::OS)
        .with("Arch", std::env::consts::ARCH);
    config.fallback_email = Some(FALLBACK_EMAIL.to_string());
    Ok(config)
}

struct DemoApp {
    pane: FeedbackPane,
}

impl DemoApp {
    fn new() -> Result<Self, String> {
        let config = demo_config()?;
        let pane = FeedbackPane::new(config).map_err(|err| err.to_string())?;
        Ok(Self { pane })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Send us feedback");
            ui.add_space(8.0);
            self.pane.ui(ui);
        });
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_config_always_offers_a_fallback_email() {
        let config = demo_config().unwrap();
        assert_eq!(config.fallback_email.as_deref(), Some(FALLBACK_EMAIL));
    }
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start feedback pane");
                ui.label(&self.message);
            });
        });
    }
}
