//! sRGB <-> CIE L*a*b* conversion (D65 white point).

use crate::Color;

const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.0;
const REF_Z: f64 = 108.883;

const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// sRGB channel to linear light.
pub(crate) fn linearize(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn delinearize(c: f64) -> f64 {
    if c > 0.003_130_8 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > EPSILON {
        cube
    } else {
        (t - OFFSET) / KAPPA
    }
}

/// Convert to `(L*, a*, b*)`. Alpha is ignored.
pub(crate) fn rgb_to_lab(color: &Color) -> (f64, f64, f64) {
    let r = linearize(color.r) * 100.0;
    let g = linearize(color.g) * 100.0;
    let b = linearize(color.b) * 100.0;

    let x = (r * 0.4124 + g * 0.3576 + b * 0.1805) / REF_X;
    let y = (r * 0.2126 + g * 0.7152 + b * 0.0722) / REF_Y;
    let z = (r * 0.0193 + g * 0.1192 + b * 0.9505) / REF_Z;

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
    (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert `(L*, a*, b*)` back to sRGB. The result may be out of gamut.
pub(crate) fn lab_to_rgb(l: f64, a: f64, b: f64, alpha: f64) -> Color {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = lab_f_inv(fx) * REF_X / 100.0;
    let y = lab_f_inv(fy) * REF_Y / 100.0;
    let z = lab_f_inv(fz) * REF_Z / 100.0;

    let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

    Color::new(delinearize(r), delinearize(g), delinearize(b), alpha)
}
