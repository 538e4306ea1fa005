//! Shadow and blur effects.

use crate::model::{self, finite_or_zero};
use crate::schema::{BlendMode, Effect, EffectType, Vector};

use super::paint::color;

/// Convert one effect.
pub fn effect(source: &model::Effect) -> Effect {
    match source {
        model::Effect::DropShadow(shadow) => shadow_effect(EffectType::DropShadow, shadow),
        model::Effect::InnerShadow(shadow) => shadow_effect(EffectType::InnerShadow, shadow),
        model::Effect::LayerBlur(blur) => blur_effect(EffectType::LayerBlur, blur),
        model::Effect::BackgroundBlur(blur) => blur_effect(EffectType::BackgroundBlur, blur),
    }
}

/// Convert an effect list, preserving order.
pub fn effects(sources: &[model::Effect]) -> Vec<Effect> {
    sources.iter().map(effect).collect()
}

fn shadow_effect(effect_type: EffectType, shadow: &model::Shadow) -> Effect {
    Effect {
        effect_type,
        visible: shadow.visible,
        radius: finite_or_zero(shadow.blur).max(0.0),
        color: Some(color(&shadow.color)),
        blend_mode: Some(BlendMode::Normal),
        offset: Some(Vector::new(
            finite_or_zero(shadow.offset.x),
            finite_or_zero(shadow.offset.y),
        )),
        spread: Some(finite_or_zero(shadow.spread)),
    }
}

fn blur_effect(effect_type: EffectType, blur: &model::Blur) -> Effect {
    Effect {
        effect_type,
        visible: blur.visible,
        radius: finite_or_zero(blur.radius).max(0.0),
        color: None,
        blend_mode: None,
        offset: None,
        spread: None,
    }
}
