//! Floating toast notifications.
//!
//! A notification is a fixed-position `div` appended to `<body>`. It slides in,
//! stays for its duration, slides out, and is removed once the exit animation
//! has run. The `slideIn`/`slideOut` keyframes come from
//! [`install_animation_styles`].

use bridge_traits::{Document, Scheduler};
use core_runtime::config::{NotificationPalette, UtilsSettings};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

const SLIDE_IN: &str = "slideIn 0.3s ease-out";
const SLIDE_OUT: &str = "slideOut 0.3s ease-out";

const ANIMATION_KEYFRAMES: &str = r#"
    @keyframes slideIn {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
"#;

/// Notification flavour; decides the CSS class suffix and background.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    /// Any other kind: keeps its class name, uses the info colour.
    Other(String),
}

impl NotificationKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "error" => Self::Error,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Other(kind) => kind,
        }
    }

    pub fn background<'a>(&self, palette: &'a NotificationPalette) -> &'a str {
        match self {
            Self::Success => &palette.success,
            Self::Error => &palette.error,
            Self::Info | Self::Other(_) => &palette.info,
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(kind: &str) -> Self {
        Self::parse(kind)
    }
}

fn notification_css(background: &str) -> String {
    format!(
        "position: fixed;\n\
         top: 20px;\n\
         right: 20px;\n\
         padding: 15px 25px;\n\
         border-radius: 8px;\n\
         background: {background};\n\
         color: white;\n\
         box-shadow: 0 5px 15px rgba(0,0,0,0.2);\n\
         z-index: 10000;\n\
         animation: {SLIDE_IN};"
    )
}

/// Show a toast with `text` for `duration`, then animate it out and remove it.
pub fn notify(
    document: &dyn Document,
    scheduler: &Rc<dyn Scheduler>,
    settings: &UtilsSettings,
    text: &str,
    kind: &NotificationKind,
    duration: Duration,
) -> Result<()> {
    let notification = document.create_element("div")?;
    notification.set_class_name(&format!("notification notification-{}", kind.as_str()));
    notification.set_text(text);
    notification.set_css_text(&notification_css(
        kind.background(&settings.notification_palette),
    ));
    document.append_to_body(notification.as_ref())?;
    debug!(kind = kind.as_str(), ?duration, "Showing notification");

    let exit = settings.notification_exit();
    let exit_scheduler = Rc::clone(scheduler);
    scheduler.set_timeout(
        duration,
        Box::new(move || {
            notification.set_style("animation", SLIDE_OUT);
            exit_scheduler.set_timeout(exit, Box::new(move || notification.remove()));
        }),
    );

    Ok(())
}

/// Append the `slideIn`/`slideOut` keyframes to `<head>`.
pub fn install_animation_styles(document: &dyn Document) -> Result<()> {
    let style = document.create_element("style")?;
    style.set_text(ANIMATION_KEYFRAMES);
    document.append_to_head(style.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::testing::{FakeDocument, ManualScheduler};

    fn setup() -> (FakeDocument, Rc<ManualScheduler>, Rc<dyn Scheduler>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let dyn_scheduler: Rc<dyn Scheduler> = scheduler.clone();
        (FakeDocument::new(), scheduler, dyn_scheduler)
    }

    #[test]
    fn test_kind_parsing_and_colours() {
        let palette = NotificationPalette::default();

        assert_eq!(NotificationKind::from("success").background(&palette), "#28a745");
        assert_eq!(NotificationKind::from("error").background(&palette), "#dc3545");
        assert_eq!(NotificationKind::from("info").background(&palette), "#667eea");

        let warning = NotificationKind::from("warning");
        assert_eq!(warning, NotificationKind::Other("warning".to_string()));
        assert_eq!(warning.as_str(), "warning");
        assert_eq!(warning.background(&palette), "#667eea");
    }

    #[test]
    fn test_notification_lifecycle() {
        let (document, scheduler, dyn_scheduler) = setup();
        let settings = UtilsSettings::default();

        notify(
            &document,
            &dyn_scheduler,
            &settings,
            "Profile saved",
            &NotificationKind::Success,
            Duration::from_millis(3000),
        )
        .unwrap();

        let shown = document.body_children();
        assert_eq!(shown.len(), 1);
        let toast = &shown[0];
        assert_eq!(toast.tag(), "div");
        assert_eq!(toast.text(), "Profile saved");
        assert_eq!(toast.class_name(), "notification notification-success");
        assert_eq!(toast.style("background").as_deref(), Some("#28a745"));
        assert_eq!(toast.style("position").as_deref(), Some("fixed"));
        assert_eq!(toast.style("animation").as_deref(), Some(SLIDE_IN));

        scheduler.advance(Duration::from_millis(3000));
        assert_eq!(toast.style("animation").as_deref(), Some(SLIDE_OUT));
        assert!(toast.is_attached());

        scheduler.advance(Duration::from_millis(299));
        assert!(toast.is_attached());

        scheduler.advance(Duration::from_millis(1));
        assert!(document.body_children().is_empty());
    }

    #[test]
    fn test_unknown_kind_uses_accent_colour() {
        let (document, _scheduler, dyn_scheduler) = setup();

        notify(
            &document,
            &dyn_scheduler,
            &UtilsSettings::default(),
            "Heads up",
            &NotificationKind::from("warning"),
            Duration::from_millis(100),
        )
        .unwrap();

        let toast = &document.body_children()[0];
        assert_eq!(toast.class_name(), "notification notification-warning");
        assert_eq!(toast.style("background").as_deref(), Some("#667eea"));
    }

    #[test]
    fn test_install_animation_styles() {
        let document = FakeDocument::new();
        install_animation_styles(&document).unwrap();

        let head = document.head_children();
        assert_eq!(head.len(), 1);
        assert_eq!(head[0].tag(), "style");
        assert!(head[0].text().contains("@keyframes slideIn"));
        assert!(head[0].text().contains("@keyframes slideOut"));
    }
}
