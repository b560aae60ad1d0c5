use leptos::callback::{Callable as _, Callback};
use leptos::{ev, prelude::*};
use leptos_router::components::A;

const NAV_LINK_CLASS: &str = "text-gray-300 transition-colors duration-300";

/// Class list for a nav link, with the caller's extra class appended.
#[must_use]
pub fn nav_link_class(extra: &str) -> String {
    if extra.is_empty() {
        NAV_LINK_CLASS.to_owned()
    } else {
        format!("{NAV_LINK_CLASS} {extra}")
    }
}

/// Whether `href` points at a section of a page rather than a page.
///
/// These render as plain anchors: the router's link would mark every one of
/// them `aria-current="page"` while the page itself is open.
#[must_use]
pub fn is_section_link(href: &str) -> bool {
    href.contains('#')
}

/// A styled link. `on_click` is forwarded as-is.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = nav_link_class(&class);
    let forward_click = move |_: ev::MouseEvent| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    if is_section_link(&href) {
        view! {
            <a href=href class=class on:click=forward_click>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=href attr:class=class on:click=forward_click>
                {children()}
            </A>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_with_empty_extra() {
        assert_eq!(
            nav_link_class(""),
            "text-gray-300 transition-colors duration-300"
        );
    }

    #[test]
    fn extra_class_is_appended() {
        assert_eq!(
            nav_link_class("animate-text-wave"),
            "text-gray-300 transition-colors duration-300 animate-text-wave"
        );
    }

    #[test]
    fn section_links_are_hash_targets() {
        assert!(is_section_link("/#gallery"));
        assert!(is_section_link("#contact"));
        assert!(!is_section_link("/register"));
        assert!(!is_section_link("/"));
    }
}
