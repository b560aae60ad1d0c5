//! Server-rendered markup of the site header: item order, the flagship
//! flourish, the auth area, and the entry animation style.

use app::components::navbar::Navbar;
use app::nav::WAVE_TEXT_CLASS;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

fn render_navbar(logged_in: bool) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! {
            <Router>
                <Navbar logged_in=Signal::stored(logged_in)/>
            </Router>
        }
        .to_html()
    })
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle} missing from {html}"))
}

#[test]
fn desktop_row_lists_sections_in_order() {
    let html = render_navbar(true);
    let gallery = position(&html, "href=\"/#gallery\"");
    let flagship = position(&html, "href=\"/#Flagship\"");
    let contact = position(&html, "href=\"/#contact\"");
    assert!(gallery < flagship && flagship < contact);
}

#[test]
fn closed_menu_renders_no_overlay() {
    let html = render_navbar(true);
    assert_eq!(html.matches("href=\"/#gallery\"").count(), 1);
    assert!(!html.contains("fixed inset-0"));
}

#[test]
fn only_flagship_link_waves() {
    let html = render_navbar(false);
    assert_eq!(html.matches(WAVE_TEXT_CLASS).count(), 1);
    let wave = position(&html, WAVE_TEXT_CLASS);
    assert!(wave > position(&html, "href=\"/#Flagship\""));
    assert!(wave < position(&html, "href=\"/#contact\""));
}

#[test]
fn logged_in_header_shows_profile_only() {
    let html = render_navbar(true);
    assert!(html.contains("href=\"/dashboard\""));
    assert!(!html.contains("href=\"/register\""));
    assert!(!html.contains("href=\"/login\""));
}

#[test]
fn logged_out_header_offers_register_and_login() {
    let html = render_navbar(false);
    assert!(html.contains("href=\"/register\""));
    assert!(html.contains("href=\"/login\""));
    assert!(!html.contains("href=\"/dashboard\""));
}

#[test]
fn section_links_are_not_marked_current() {
    for logged_in in [true, false] {
        assert!(!render_navbar(logged_in).contains("aria-current"));
    }
}

#[test]
fn bar_entry_leaves_no_transform_behind() {
    let html = render_navbar(true);
    assert!(html.contains("animation:motion-enter 500ms ease-out backwards"));
    assert!(html.contains("--motion-to-transform:none"));
}
