use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS viewport width. Unreadable widths classify as touch (inert).
#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn create_child(
    document: &web::Document,
    parent: &web::Node,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append .{}: {:?}", class, e))?;
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("query {:?}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

/// Seed for the sparkle RNG.
pub fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    if let Err(e) = getrandom::getrandom(&mut buf) {
        log::warn!("getrandom failed, using fixed seed: {}", e);
        return 0x9E37_79B9_7F4A_7C15;
    }
    u64::from_le_bytes(buf)
}
