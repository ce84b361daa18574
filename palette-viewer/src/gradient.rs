//! Reading gradient CSS back into stops, and rasterising it for export.

use palette_core::Rgb;

const PREFIX: &str = "linear-gradient(to right,";

/// Stops of a `linear-gradient(to right, ...)` value, in order.
///
/// Empty or unparsable stops come back as `None`; anything that is not a
/// left-to-right linear gradient has no stops.
pub fn parse_stops(css: &str) -> Vec<Option<Rgb>> {
    let Some(inner) = css
        .trim()
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return Vec::new();
    };
    inner.split(',').map(Rgb::from_hex).collect()
}

/// Color at `t` in `[0, 1]` along evenly spaced stops.
///
/// Missing stops are painted with `missing`.
pub fn sample(stops: &[Option<Rgb>], t: f32, missing: Rgb) -> Rgb {
    let color = |i: usize| stops[i].unwrap_or(missing);
    match stops.len() {
        0 => missing,
        1 => color(0),
        n => {
            let pos = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let i = (pos.floor() as usize).min(n - 2);
            let frac = pos - i as f32;
            lerp(color(i), color(i + 1), frac)
        }
    }
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let channel = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Rasterise the gradient into an image, left to right.
pub fn render_image(stops: &[Option<Rgb>], width: u32, height: u32, missing: Rgb) -> image::RgbImage {
    let mut img = image::RgbImage::new(width, height);
    let span = width.saturating_sub(1).max(1) as f32;
    for x in 0..width {
        let c = sample(stops, x as f32 / span, missing);
        for y in 0..height {
            img.put_pixel(x, y, image::Rgb([c.r, c.g, c.b]));
        }
    }
    img
}
