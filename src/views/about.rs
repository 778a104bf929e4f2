use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about-page", class: "page",
            h1 { "About" }
            p { "Who we are and what we care about." }
        }
    }
}
