use image::{DynamicImage, Rgb, RgbImage};

use crate::domain::{BoundingBox, Detection};

const BOX_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
const BOX_THICKNESS: i64 = 2;

/// Draws one outline per prediction onto an RGB copy of `image`.
/// Boxes are clipped to the image bounds.
pub fn annotate(image: &DynamicImage, detection: &Detection) -> RgbImage {
    let mut canvas = image.to_rgb8();
    for prediction in &detection.predictions {
        draw_outline(&mut canvas, prediction.bounds());
    }
    canvas
}

fn draw_outline(canvas: &mut RgbImage, bounds: BoundingBox) {
    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;
    let (x_from, x_to) = (bounds.left.max(0), bounds.right.min(max_x));
    let (y_from, y_to) = (bounds.top.max(0), bounds.bottom.min(max_y));

    for t in 0..BOX_THICKNESS {
        for x in x_from..=x_to {
            put(canvas, x, bounds.top + t);
            put(canvas, x, bounds.bottom - t);
        }
        for y in y_from..=y_to {
            put(canvas, bounds.left + t, y);
            put(canvas, bounds.right - t, y);
        }
    }
}

fn put(canvas: &mut RgbImage, x: i64, y: i64) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    canvas.put_pixel(x as u32, y as u32, BOX_COLOR);
}
