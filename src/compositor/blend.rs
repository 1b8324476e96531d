use crate::foundation::math::{mul_div255_u8, unit_to_u8};

pub type PremulRgba8 = [u8; 4];

/// Source-over on premultiplied RGBA8, weighted by `opacity`.
///
/// `opacity` is quantized to a 0..=255 weight with round-half-up, the same
/// rule used for color premultiplication, so an opaque source at opacity 1
/// replaces the destination bit-exactly.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(unit_to_u8(opacity));
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/blend.rs"]
mod tests;
