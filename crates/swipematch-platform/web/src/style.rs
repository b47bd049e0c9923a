use swipematch_foundation::{CardPairVisual, SlotVisual};
use swipematch_ui_graphics::GraphicsLayer;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// CSS `transform` for a layer. Translation resolves against the element's
/// own width through a percentage, so the card size is not needed here.
pub fn css_transform(layer: &GraphicsLayer) -> String {
    let translate_x = if layer.translation_x_fraction == 0.0 {
        format!("translateX({}px)", layer.translation_x)
    } else {
        format!(
            "translateX(calc({}% + {}px))",
            layer.translation_x_fraction * 100.0,
            layer.translation_x
        )
    };
    format!(
        "{translate_x} translateY({}px) rotate({}deg) scale({})",
        layer.translation_y, layer.rotation_z, layer.scale
    )
}

pub fn css_opacity(layer: &GraphicsLayer) -> String {
    layer.alpha.clamp(0.0, 1.0).to_string()
}

pub fn apply_slot_visual(element: &HtmlElement, visual: &SlotVisual) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("transform", &css_transform(&visual.layer))?;
    style.set_property("opacity", &css_opacity(&visual.layer))?;
    style.set_property("z-index", &visual.z_index.to_string())?;
    Ok(())
}

/// Paint both card slots. Called once per animation frame.
pub fn apply_card_visuals(
    current: &HtmlElement,
    next: &HtmlElement,
    visuals: &CardPairVisual,
) -> Result<(), JsValue> {
    apply_slot_visual(current, &visuals.current)?;
    apply_slot_visual(next, &visuals.next)
}
