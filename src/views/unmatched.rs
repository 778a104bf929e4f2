use dioxus::prelude::*;

/// Renders nothing; there is no not-found view.
#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    log::debug!("No content for /{}", segments.join("/"));
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_page(page: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(page);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_pages_render_their_heading() {
        assert!(render_page(|| rsx! { crate::views::About {} }).contains("<h1>About</h1>"));
        assert!(render_page(|| rsx! { crate::views::Services {} }).contains("<h1>Services</h1>"));
    }

    #[test]
    fn test_unmatched_renders_nothing() {
        let html = render_page(|| {
            rsx! {
                Unmatched { segments: vec!["unknown".to_string()] }
            }
        });
        assert!(!html.contains("<section"));
        assert!(!html.contains("unknown"));
    }
}
