use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home-page", class: "page",
            h1 { "Home" }
            p { "Welcome! Pick a section from the bar above." }
        }
    }
}
