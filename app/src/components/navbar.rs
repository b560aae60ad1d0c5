//! The fixed site header.
//!
//! Owns the scroll and mobile-menu state, renders the desktop row, the auth
//! call-to-action area, and the full-screen mobile overlay. All decisions
//! about what to show come from [`crate::nav`]; this module only wires them
//! into the view and manages the scroll subscription's lifetime.

use leptos::callback::Callback;
use leptos::prelude::*;

use crate::components::button::{Button, ButtonLink, ButtonSize, ButtonVariant};
use crate::components::icons;
use crate::components::nav_link::NavLink;
use crate::motion::{
    NAVBAR_ENTER, OVERLAY, OVERLAY_HIDE_CLASS, OVERLAY_ITEM, OVERLAY_SHOW_CLASS,
    overlay_hide_delay, presence_style,
};
use crate::nav::{NavState, auth_links, desktop_items, header_class, mobile_items};
use crate::scroll::{BrowserViewport, ScrollSubscription, subscribe_scroll};

pub const LOGO_SRC: &str = "/infinitum2.svg";
pub const LOGO_ALT: &str = "Infinitum Logo";

/// Header state for the current owner, fed by a scroll listener.
///
/// `listen` attaches the listener and returns its guard; the guard is held
/// until the owner is cleaned up, so an unmounted header stops listening.
pub fn use_nav_state<L>(listen: L) -> RwSignal<NavState>
where
    L: FnOnce(Box<dyn Fn(f64)>) -> ScrollSubscription,
{
    let state = RwSignal::new(NavState::default());
    let subscription = listen(Box::new(move |offset| {
        state.maybe_update(|s| s.observe_scroll(offset));
    }));
    on_cleanup(move || drop(subscription));
    state
}

/// Renders the site header.
///
/// `logged_in` decides the auth area: a single "Profile" link when true,
/// "Register" and "Login" otherwise. The header has no opinion on where the
/// session comes from.
#[component]
pub fn Navbar(#[prop(into)] logged_in: Signal<bool>) -> impl IntoView {
    let state = use_nav_state(|on_offset| subscribe_scroll(BrowserViewport, on_offset));
    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));

    let toggle_menu = move || state.update(NavState::toggle_menu);

    // The overlay is a sibling of <nav>: the bar's transform and backdrop
    // filter would otherwise become the containing block of `fixed inset-0`.
    view! {
        <nav
            aria-label="Main"
            class=move || header_class(scrolled.get())
            style=NAVBAR_ENTER.enter_style()
        >
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between py-4">
                    <a href="/" class="flex items-center">
                        <img
                            src=LOGO_SRC
                            alt=LOGO_ALT
                            width="150"
                            height="50"
                            loading="eager"
                            fetchpriority="high"
                        />
                    </a>

                    <div class="hidden md:flex space-x-8">
                        {desktop_items()
                            .iter()
                            .map(|item| {
                                view! {
                                    <NavLink href=item.href class=item.extra_class()>
                                        {item.label}
                                    </NavLink>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:flex space-x-4">
                        {move || {
                            auth_links(logged_in.get())
                                .iter()
                                .map(|link| {
                                    view! {
                                        <ButtonLink
                                            href=link.href
                                            variant=link.variant
                                            class="text-gray-300"
                                        >
                                            {link.label}
                                        </ButtonLink>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="md:hidden"
                        attr:aria-label=move || {
                            if menu_open.get() { "Close menu" } else { "Open menu" }
                        }
                        attr:aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| toggle_menu()
                    >
                        <Show when=move || menu_open.get() fallback=icons::menu>
                            {icons::close()}
                        </Show>
                    </Button>
                </div>
            </div>
        </nav>

        <AnimatedShow
            when=menu_open
            show_class=OVERLAY_SHOW_CLASS
            hide_class=OVERLAY_HIDE_CLASS
            hide_delay=overlay_hide_delay()
        >
            // z-40 keeps the bar, and its close button, above the overlay.
            <div
                class="fixed inset-0 z-40 bg-black/95 pt-16"
                style=move || presence_style(&OVERLAY, menu_open.get())
            >
                <div class="container mx-auto px-4 py-8">
                    {mobile_items()
                        .iter()
                        .map(|item| {
                            view! {
                                <div
                                    class="py-3 text-2xl"
                                    style=move || presence_style(&OVERLAY_ITEM, menu_open.get())
                                >
                                    <NavLink
                                        href=item.href
                                        class=item.extra_class()
                                        on_click=Callback::new(move |()| toggle_menu())
                                    >
                                        {item.label}
                                    </NavLink>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedShow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Window stand-in; a listener is skipped once its guard detaches it.
    #[derive(Clone, Default)]
    struct TestWindow {
        listeners: Rc<RefCell<Vec<(Arc<AtomicBool>, Box<dyn Fn(f64)>)>>>,
    }

    impl TestWindow {
        fn listen(&self, on_offset: Box<dyn Fn(f64)>) -> ScrollSubscription {
            let detached = Arc::new(AtomicBool::new(false));
            self.listeners
                .borrow_mut()
                .push((detached.clone(), on_offset));
            ScrollSubscription::new(move || detached.store(true, Ordering::SeqCst))
        }

        fn scroll_to(&self, offset: f64) {
            for (detached, listener) in self.listeners.borrow().iter() {
                if !detached.load(Ordering::SeqCst) {
                    listener(offset);
                }
            }
        }

        fn attached(&self) -> usize {
            self.listeners
                .borrow()
                .iter()
                .filter(|(detached, _)| !detached.load(Ordering::SeqCst))
                .count()
        }
    }

    #[test]
    fn scroll_updates_state_while_owner_lives() {
        let window = TestWindow::default();
        let owner = Owner::new();
        owner.with(|| {
            let state = use_nav_state(|on_offset| window.listen(on_offset));
            assert!(!state.get_untracked().scrolled);

            window.scroll_to(80.0);
            assert!(state.get_untracked().scrolled);

            window.scroll_to(50.0);
            assert!(!state.get_untracked().scrolled);
        });
        assert_eq!(window.attached(), 1);
    }

    #[test]
    fn cleanup_detaches_listener() {
        let window = TestWindow::default();
        let owner = Owner::new();
        owner.with(|| {
            let _state = use_nav_state(|on_offset| window.listen(on_offset));
        });
        assert_eq!(window.attached(), 1);

        owner.cleanup();
        assert_eq!(window.attached(), 0);
        // Events after unmount reach no listener.
        window.scroll_to(500.0);
    }

    #[test]
    fn repeated_mounts_leave_nothing_attached() {
        let window = TestWindow::default();
        for _ in 0..5 {
            let owner = Owner::new();
            owner.with(|| {
                let _state = use_nav_state(|on_offset| window.listen(on_offset));
            });
            owner.cleanup();
        }
        assert_eq!(window.attached(), 0);
    }
}
