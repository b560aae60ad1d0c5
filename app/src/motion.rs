//! Declarative enter/exit animations used by the header.
//!
//! A [`Transition`] is a start and end [`Pose`] plus timing. It renders to an
//! inline style: the poses become `--motion-*` custom properties and the
//! animation runs one of the two generic keyframes in `style/tailwind.css`
//! (`motion-enter`, `motion-exit`), which read those properties.

use std::time::Duration;

/// Opacity and vertical offset at one end of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub y_px: i32,
}

impl Pose {
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        y_px: 0,
    };

    /// CSS `transform` for this pose. A settled pose is `none`, so a finished
    /// animation does not leave a containing block behind for fixed children.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.y_px == 0 {
            "none".to_owned()
        } else {
            format!("translateY({}px)", self.y_px)
        }
    }
}

/// `animation-fill-mode` for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Hold the start pose during any delay, then drop all animation styles.
    Backwards,
    Both,
}

impl Fill {
    const fn as_css(self) -> &'static str {
        match self {
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
    pub fill: Fill,
}

impl Transition {
    fn pose_vars(&self) -> String {
        format!(
            "--motion-from-opacity:{};--motion-from-transform:{};--motion-to-opacity:{};--motion-to-transform:{}",
            self.from.opacity,
            self.from.transform(),
            self.to.opacity,
            self.to.transform()
        )
    }

    /// Inline style played when the element mounts: `from` to `to`.
    #[must_use]
    pub fn enter_style(&self) -> String {
        format!(
            "{};animation:motion-enter {}ms ease-out {}",
            self.pose_vars(),
            self.duration.as_millis(),
            self.fill.as_css()
        )
    }

    /// Inline style played before the element unmounts: `to` back to `from`.
    #[must_use]
    pub fn exit_style(&self) -> String {
        format!(
            "{};animation:motion-exit {}ms ease-in {}",
            self.pose_vars(),
            self.duration.as_millis(),
            self.fill.as_css()
        )
    }
}

/// Picks the enter or exit style for an element under a presence wrapper.
#[must_use]
pub fn presence_style(transition: &Transition, visible: bool) -> String {
    if visible {
        transition.enter_style()
    } else {
        transition.exit_style()
    }
}

/// The whole bar slides down into place on first mount.
pub const NAVBAR_ENTER: Transition = Transition {
    from: Pose {
        opacity: 1.0,
        y_px: -100,
    },
    to: Pose::SETTLED,
    duration: Duration::from_millis(500),
    fill: Fill::Backwards,
};

/// Mobile overlay fade + slide.
pub const OVERLAY: Transition = Transition {
    from: Pose {
        opacity: 0.0,
        y_px: -20,
    },
    to: Pose::SETTLED,
    duration: Duration::from_millis(300),
    fill: Fill::Both,
};

/// Each overlay entry; all entries start together.
pub const OVERLAY_ITEM: Transition = Transition {
    from: Pose {
        opacity: 0.0,
        y_px: 10,
    },
    to: Pose::SETTLED,
    duration: Duration::from_millis(200),
    fill: Fill::Both,
};

/// Presence wrapper classes: a closing overlay must not swallow taps.
pub const OVERLAY_SHOW_CLASS: &str = "pointer-events-auto";
pub const OVERLAY_HIDE_CLASS: &str = "pointer-events-none";

/// How long the overlay stays mounted after closing: the longer of its own
/// exit and its items' exit.
#[must_use]
pub fn overlay_hide_delay() -> Duration {
    OVERLAY.duration.max(OVERLAY_ITEM.duration)
}
