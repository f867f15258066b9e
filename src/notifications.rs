//! Transient success/error notifications rendered as anchored toasts.

use std::time::{Duration, Instant};

const SUCCESS_DISMISS: Duration = Duration::from_secs(4);
const TOAST_WIDTH: f32 = 360.0;

/// Visual tone of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// How a notification leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismiss {
    /// Removed automatically once the duration elapses.
    After(Duration),
    /// Stays until the user closes it.
    Manual,
}

/// One queued notification.
#[derive(Clone, Debug)]
pub struct Notification {
    pub text: String,
    pub tone: Tone,
    pub dismiss: Dismiss,
    /// URL offered behind an "Open issue in browser" button.
    pub link: Option<String>,
    created_at: Instant,
}

impl Notification {
    fn expired(&self, now: Instant) -> bool {
        match self.dismiss {
            Dismiss::After(duration) => now.duration_since(self.created_at) >= duration,
            Dismiss::Manual => false,
        }
    }
}

/// FIFO queue of pending notifications.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    /// Queue an auto-dismissing success message.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, Tone::Success, Dismiss::After(SUCCESS_DISMISS), None);
    }

    /// Queue an auto-dismissing success message with an issue link.
    pub fn success_with_link(&mut self, text: impl Into<String>, link: impl Into<String>) {
        self.push(
            text,
            Tone::Success,
            Dismiss::After(SUCCESS_DISMISS),
            Some(link.into()),
        );
    }

    /// Queue an error message that persists until manually closed.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, Tone::Error, Dismiss::Manual, None);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    fn push(&mut self, text: impl Into<String>, tone: Tone, dismiss: Dismiss, link: Option<String>) {
        self.items.push(Notification {
            text: text.into(),
            tone,
            dismiss,
            link,
            created_at: Instant::now(),
        });
    }

    fn prune_expired(&mut self, now: Instant) {
        self.items.retain(|item| !item.expired(now));
    }

    /// Draw pending toasts and drop the expired or closed ones.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune_expired(Instant::now());
        if self.items.is_empty() {
            return;
        }

        let mut closed = None;
        let mut opened = None;
        egui::Area::new(egui::Id::new("feedback_pane_notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, item) in self.items.iter().enumerate() {
                    egui::Frame::window(ui.style()).show(ui, |ui| {
                        ui.set_max_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&item.text).color(tone_color(item.tone)),
                            );
                            if item.dismiss == Dismiss::Manual
                                && ui.small_button("✕").clicked()
                            {
                                closed = Some(index);
                            }
                        });
                        if let Some(link) = &item.link {
                            if ui.small_button("Open issue in browser").clicked() {
                                opened = Some(link.clone());
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = closed {
            self.items.remove(index);
        }
        if let Some(link) = opened {
            if let Err(err) = open::that(&link) {
                tracing::warn!(error = %err, "could not open issue link");
            }
        }
        if self
            .items
            .iter()
            .any(|item| matches!(item.dismiss, Dismiss::After(_)))
        {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Success => egui::Color32::from_rgb(0x8f, 0xd6, 0x94),
        Tone::Error => egui::Color32::from_rgb(0xe6, 0x6e, 0x6e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_auto_dismisses_and_error_persists() {
        let mut notifications = Notifications::default();
        notifications.success("Feedback submitted successfully");
        notifications.error("Feedback body cannot be empty");
        let items: Vec<_> = notifications.iter().collect();
        assert_eq!(items[0].tone, Tone::Success);
        assert!(matches!(items[0].dismiss, Dismiss::After(_)));
        assert_eq!(items[1].tone, Tone::Error);
        assert_eq!(items[1].dismiss, Dismiss::Manual);
    }

    #[test]
    fn prune_keeps_manual_notifications() {
        let mut notifications = Notifications::default();
        notifications.push("gone", Tone::Success, Dismiss::After(Duration::ZERO), None);
        notifications.error("stays");
        notifications.prune_expired(Instant::now() + Duration::from_secs(1));
        let items: Vec<_> = notifications.iter().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "stays");
    }

    #[test]
    fn success_link_is_attached() {
        let mut notifications = Notifications::default();
        notifications
            .success_with_link("done", "https://github.com/acme/feedback/issues/7");
        let item = notifications.iter().next().unwrap();
        assert_eq!(
            item.link.as_deref(),
            Some("https://github.com/acme/feedback/issues/7")
        );
    }
}
