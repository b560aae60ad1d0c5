//! Button styling shared by real buttons and links dressed as buttons.

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-white/60 disabled:pointer-events-none disabled:opacity-50";

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-white/10 hover:bg-white/20",
            Self::Outline => "border border-white/30 bg-transparent hover:bg-white/10",
            Self::Ghost => "hover:bg-white/10",
        }
    }
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Composes the class list for a button-styled element.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("{BASE} {} {}", variant.class(), size.class());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, &class)>
            {children()}
        </button>
    }
}

/// A router link wearing button styling, for calls to action that navigate.
#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Applied after the button classes, so it can override text colour.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href attr:class=button_class(variant, size, &class)>
            {children()}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Default, "");
        assert!(class.starts_with(BASE));
        assert!(class.ends_with("bg-white/10 hover:bg-white/20 h-10 px-4 py-2"));
    }

    #[test]
    fn outline_adds_border() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Default, "");
        assert!(class.contains("border border-white/30"));
    }

    #[test]
    fn ghost_icon_with_extra() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Icon, "md:hidden");
        assert!(class.ends_with("hover:bg-white/10 h-10 w-10 md:hidden"));
        assert!(!class.contains("border"));
    }

    #[test]
    fn defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }
}
