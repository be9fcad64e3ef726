// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability check and one-time document restructuring.

use alloc::format;
use alloc::string::String;
use core::time::Duration;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use zoomdeck_core::config::DeckConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = CSS, js_name = "supports")]
    fn css_supports(property: &str, value: &str) -> bool;
}

/// Class given to the root when the browser cannot run a deck.
pub const NOT_SUPPORTED_CLASS: &str = "zoomdeck-not-supported";

/// Returns `true` for user agents the deck refuses to run on.
pub(crate) fn is_refused_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ["iphone", "ipod", "ipad", "android"]
        .iter()
        .any(|needle| ua.contains(needle))
}

/// Returns `true` if `window` can show a deck: a desktop user agent and
/// support for CSS 3D perspective.
pub fn supported(window: &Window) -> Result<bool, JsValue> {
    let ua = window.navigator().user_agent()?;
    Ok(!is_refused_user_agent(&ua) && css_supports("perspective", "1px"))
}

/// Formats a duration as a CSS time in milliseconds.
pub(crate) fn css_ms(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

/// Moves every child of `root` into a new `div.canvas`, appends the canvas
/// to `root`, and applies the base styles. Returns the canvas.
pub(crate) fn restructure(
    document: &Document,
    root: &HtmlElement,
    config: &DeckConfig,
) -> Result<HtmlElement, JsValue> {
    let canvas: HtmlElement = document.create_element("div")?.unchecked_into();
    canvas.set_class_name("canvas");
    while let Some(child) = root.first_child() {
        canvas.append_child(&child)?;
    }
    root.append_child(&canvas)?;

    if let Some(html) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        html.style().set_property("height", "100%")?;
    }
    if let Some(body) = document.body() {
        let s = body.style();
        s.set_property("height", "100%")?;
        s.set_property("overflow", "hidden")?;
    }

    let transition = format!("all {} ease-in-out", css_ms(config.transition_duration));
    for el in [root, &canvas] {
        let s = el.style();
        s.set_property("position", "absolute")?;
        s.set_property("transform-origin", "top left")?;
        s.set_property("transition", &transition)?;
        s.set_property("transform-style", "preserve-3d")?;
    }
    let s = root.style();
    s.set_property("top", "50%")?;
    s.set_property("left", "50%")?;
    s.set_property("perspective", &format!("{}px", config.perspective))?;

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_user_agents() {
        assert!(is_refused_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_refused_user_agent("Mozilla/5.0 (Linux; Android 14)"));
        assert!(is_refused_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"));
        assert!(!is_refused_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
    }

    #[test]
    fn css_time() {
        assert_eq!(css_ms(Duration::from_millis(500)), "500ms");
        assert_eq!(css_ms(Duration::ZERO), "0ms");
    }
}
