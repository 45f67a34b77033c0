//! Window-level event helpers for components that need to react to
//! interaction outside their own subtree.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;

/// Runs `on_outside` on every `mousedown` whose target is not a
/// descendant of `target`. The listener lives as long as the owning
/// component: `window_event_listener` removes it when the reactive scope
/// is disposed.
///
/// Handlers are independent: several components may watch the window at
/// the same time, each deciding applicability against its own node.
pub fn on_click_outside(target: NodeRef<Div>, on_outside: impl Fn() + 'static) {
    let _ = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        let inside = target
            .get_untracked()
            .and_then(|el| {
                ev.target()
                    .and_then(|t| t.dyn_into::<Node>().ok())
                    .map(|node| el.contains(Some(&node)))
            })
            .unwrap_or(false);
        if !inside {
            on_outside();
        }
    });
}
