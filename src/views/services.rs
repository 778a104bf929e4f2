use dioxus::prelude::*;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "services-page", class: "page",
            h1 { "Services" }
            p { "What we can do for you." }
        }
    }
}
