//! Layer/flow colouring for path previews.

/// Hue degrees advanced per layer.
const HUE_STEP_DEGREES: usize = 30;
const LAYER_SATURATION: f64 = 0.8;
const BASE_LIGHTNESS: f64 = 0.25;
const FLOW_LIGHTNESS_RANGE: f64 = 0.5;

/// Convert HSL (all components in `[0, 1]`) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Hue in `[0, 1)` for a layer; repeats every 12 layers.
pub fn layer_hue(layer_index: usize) -> f64 {
    ((layer_index % (360 / HUE_STEP_DEGREES)) * HUE_STEP_DEGREES) as f64 / 360.0
}

/// Colour of a segment: hue from its layer, lightness from its share of the
/// largest extrusion.
pub fn segment_color(layer_index: usize, extrusion: f64, max_extrusion: f64) -> [f32; 3] {
    let lightness = BASE_LIGHTNESS + FLOW_LIGHTNESS_RANGE * (extrusion / max_extrusion);
    let lightness = if lightness.is_finite() {
        lightness.clamp(0.0, 1.0)
    } else {
        BASE_LIGHTNESS
    };
    let [r, g, b] = hsl_to_rgb(layer_hue(layer_index), LAYER_SATURATION, lightness);
    [r as f32, g as f32, b as f32]
}
