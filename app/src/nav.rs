//! Navigation model for the site header.
//!
//! Everything here is plain data and pure functions so the `navbar` component
//! stays a thin rendering layer over it: the destinations, which of them show
//! on wide screens, which call-to-action links appear for a session, and the
//! two bits of interactive state the header owns.

use crate::components::button::ButtonVariant;

/// Vertical scroll offset, in CSS pixels, past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Number of leading [`NAV_ITEMS`] shown in the desktop row.
pub const DESKTOP_ITEM_COUNT: usize = 3;

/// Label of the item that gets the wave-text flourish.
pub const FLAGSHIP_LABEL: &str = "Flagship";

/// Class applied to the flagship label; keyframes live in `style/tailwind.css`.
pub const WAVE_TEXT_CLASS: &str = "animate-text-wave";

/// One navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Extra class for this item's link. Empty for everything but the flagship.
    #[must_use]
    pub fn extra_class(&self) -> &'static str {
        if self.label == FLAGSHIP_LABEL {
            WAVE_TEXT_CLASS
        } else {
            ""
        }
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: "/#gallery",
        label: "Gallery",
    },
    NavItem {
        href: "/#Flagship",
        label: "Flagship",
    },
    NavItem {
        href: "/#contact",
        label: "Contact",
    },
    NavItem {
        href: "/register",
        label: "Register",
    },
    NavItem {
        href: "/login",
        label: "Login",
    },
];

/// Items rendered in the horizontal row on medium and wider viewports.
#[must_use]
pub fn desktop_items() -> &'static [NavItem] {
    &NAV_ITEMS[..DESKTOP_ITEM_COUNT]
}

/// Items rendered in the full-screen mobile overlay.
#[must_use]
pub fn mobile_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

/// A call-to-action link in the header's auth area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthLink {
    pub href: &'static str,
    pub label: &'static str,
    pub variant: ButtonVariant,
}

const SIGNED_IN_LINKS: [AuthLink; 1] = [AuthLink {
    href: "/dashboard",
    label: "Profile",
    variant: ButtonVariant::Default,
}];

const SIGNED_OUT_LINKS: [AuthLink; 2] = [
    AuthLink {
        href: "/register",
        label: "Register",
        variant: ButtonVariant::Default,
    },
    AuthLink {
        href: "/login",
        label: "Login",
        variant: ButtonVariant::Outline,
    },
];

/// Auth-area links for the given session state, in render order.
#[must_use]
pub fn auth_links(logged_in: bool) -> &'static [AuthLink] {
    if logged_in {
        &SIGNED_IN_LINKS
    } else {
        &SIGNED_OUT_LINKS
    }
}

/// Whether a scroll offset puts the header in its scrolled style.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

const HEADER_BASE_CLASS: &str = "fixed top-0 left-0 right-0 z-50 transition-colors duration-300";

/// Full class list for the `<nav>` element.
#[must_use]
pub fn header_class(scrolled: bool) -> String {
    let background = if scrolled {
        "bg-black/80 backdrop-blur-md"
    } else {
        "bg-transparent"
    };
    format!("{HEADER_BASE_CLASS} {background}")
}

/// Interactive state owned by the header for as long as it is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Folds a scroll offset into the state.
    ///
    /// Returns `true` only when `scrolled` flipped, so callers can skip
    /// notifying subscribers on the (very frequent) no-op scroll events.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        if self.scrolled == scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
