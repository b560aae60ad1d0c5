//! Landing page. Its section ids are the anchors the header links to.

use leptos::prelude::*;

pub fn component() -> impl IntoView {
    view! {
        <div class="text-white">
            <section class="flex flex-col justify-center items-center px-4 min-h-screen text-center">
                <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl md:text-7xl">
                    "Infinitum"
                </h1>
                <p class="max-w-2xl text-lg text-gray-300">
                    "Three days of code, design and everything in between."
                </p>
            </section>

            <section id="gallery" class="py-24 px-4 mx-auto max-w-5xl scroll-mt-24">
                <h2 class="mb-8 text-3xl font-bold">"Gallery"</h2>
                <p class="text-gray-300">"Moments from previous editions."</p>
            </section>

            <section id="Flagship" class="py-24 px-4 mx-auto max-w-5xl scroll-mt-24">
                <h2 class="mb-8 text-3xl font-bold">"Flagship"</h2>
                <p class="text-gray-300">"The headline events of the festival."</p>
            </section>

            <section id="contact" class="py-24 px-4 mx-auto max-w-5xl scroll-mt-24">
                <h2 class="mb-8 text-3xl font-bold">"Contact"</h2>
                <p class="text-gray-300">"Questions about registration or sponsorship? Reach out to the organising team."</p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::WAVE_TEXT_CLASS;

    #[test]
    fn sections_match_header_anchors() {
        let html = Owner::new().with(|| component().to_html());
        for id in ["gallery", "Flagship", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn wave_text_stays_in_the_header() {
        let html = Owner::new().with(|| component().to_html());
        assert!(!html.contains(WAVE_TEXT_CLASS));
    }
}
