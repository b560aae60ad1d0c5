use leptos::prelude::*;

/// Inline SVG for an `icondata` glyph, sized for the header toggle.
fn glyph(icon: icondata::Icon) -> impl IntoView {
    view! {
        <svg
            class="h-6 w-6"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=icon.view_box
            fill=icon.fill.unwrap_or("none")
            stroke=icon.stroke.unwrap_or("currentColor")
            stroke-width=icon.stroke_width
            stroke-linecap=icon.stroke_linecap
            stroke-linejoin=icon.stroke_linejoin
            aria-hidden="true"
            inner_html=icon.data
        ></svg>
    }
}

pub fn menu() -> impl IntoView {
    glyph(icondata::LuMenu)
}

pub fn close() -> impl IntoView {
    glyph(icondata::LuX)
}
