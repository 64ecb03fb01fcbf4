//! Server-side rendering helpers for component tests.

use dioxus::prelude::*;
use dioxus_core::{NoOpMutations, VirtualDom};

/// Build `app` and return the dom with its first render as HTML.
pub(crate) fn render_app(app: fn() -> Element) -> (VirtualDom, String) {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    (dom, html)
}

/// Diff whatever changed since the last render and return the new HTML.
pub(crate) fn rerender(dom: &mut VirtualDom) -> String {
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

pub(crate) fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
