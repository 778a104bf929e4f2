use crate::Route;
use crate::nav::{NavigationState, Tab};
use dioxus::prelude::*;

/// Layout shared by every route: the top bar above the routed content
#[component]
pub fn Navbar() -> Element {
    let location = dioxus::history::history().current_route();
    let state = NavigationState::at(use_route::<Route>(), &location);
    log::debug!("Showing {}, active tab {:?}", state.path(), state.active_tab());

    rsx! {
        div { class: "app-root",
            Topbar { state }
            main { class: "hero", Outlet::<Route> {} }
        }
    }
}

#[component]
pub fn Topbar(state: NavigationState) -> Element {
    rsx! {
        header { class: "topbar",
            nav { class: "nav",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.path()}",
                        class: state.button_class(tab),
                        onclick: move |_| {
                            log::debug!("Navigating to {}", tab.path());
                            navigator().push(tab.route());
                        },
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}
