//! Viewport scroll tracking with an explicit subscribe/unsubscribe lifecycle.
//!
//! Components never read the window's scroll position ambiently. They call
//! [`subscribe_scroll`] on mount and hold the returned [`ScrollSubscription`]
//! until cleanup; dropping or cancelling it detaches the listener.

use leptos::{ev, logging, prelude::*};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    #[error("scroll offset unavailable: {0}")]
    Unavailable(String),
}

/// Source of the current vertical scroll offset.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    fn scroll_offset(&self) -> Result<f64, ViewportError>;
}

/// The browser window. Only meaningful client-side.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> Result<f64, ViewportError> {
        let window: web_sys::Window = window();
        window
            .scroll_y()
            .map_err(|err| ViewportError::Unavailable(format!("{err:?}")))
    }
}

/// Reads the offset, treating an unreadable viewport as scrolled to the top.
pub fn read_offset(viewport: &impl Viewport) -> f64 {
    viewport.scroll_offset().unwrap_or_else(|err| {
        logging::warn!("{err}; assuming top of page");
        0.0
    })
}

type Remover = Box<dyn FnOnce() + Send + Sync>;

/// Guard for an attached scroll listener.
#[must_use = "dropping the subscription detaches the listener"]
pub struct ScrollSubscription {
    remove: Option<Remover>,
}

impl ScrollSubscription {
    pub fn new(remove: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.remove.is_some()
    }

    /// Detaches the listener. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Attaches a window `scroll` listener that reports the viewport's offset.
///
/// On the server this attaches nothing; the returned guard is still valid to
/// hold and drop.
pub fn subscribe_scroll<V>(viewport: V, on_offset: impl Fn(f64) + 'static) -> ScrollSubscription
where
    V: Viewport + 'static,
{
    let handle = window_event_listener(ev::scroll, move |_| on_offset(read_offset(&viewport)));
    ScrollSubscription::new(move || handle.remove())
}
