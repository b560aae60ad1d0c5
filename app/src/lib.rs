// Core application modules and components
use crate::components::{error_template, navbar::Navbar};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
mod home;
pub mod motion;
pub mod nav;
pub mod scroll;

/// Session state assumed until the site is wired to a real auth backend.
pub const DEFAULT_LOGGED_IN: bool = true;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/infinitum.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Infinitum").build()),
        )),
        body().class("bg-black").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    let logged_in = Signal::stored(DEFAULT_LOGGED_IN);

    view! {
        <Router>
            <div class="min-h-screen font-sans text-white">
                <Navbar logged_in=logged_in/>
                <main>
                    <FlatRoutes fallback=error_template::not_found>
                        <Route path=StaticSegment("") view=home::component/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("infinitum").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("infinitum").build();
        assert_eq!(&*options.output_name, "infinitum");
    }
}
