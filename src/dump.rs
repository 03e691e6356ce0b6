//! Writing and comparing rendered images
//!
//! Buffers are stored with row 0 at the bottom, the way they are shown on
//!   screen; files are written top row first so images appear upright.

use std::path::Path;

use log::debug;

use crate::base::RenderingBase;
use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::debug::DebugSink;

/// Read an image file back into a buffer, bottom row first
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<RenderingBuffer, image::ImageError> {
    let img = image::open(filename)?.into_rgb8();
    let h = img.height() as usize;
    let mut rbuf = RenderingBuffer::new(img.width() as usize, h);
    for (x, y, p) in img.enumerate_pixels() {
        let [r, g, b] = p.0;
        rbuf.put(x as usize, h - 1 - y as usize, Rgb8::new(r, g, b));
    }
    Ok(rbuf)
}

/// Save the buffer as an image, format chosen by the file extension
pub fn write_file<D: DebugSink, P: AsRef<Path>>(ren: &RenderingBase<D>, filename: P) -> Result<(), image::ImageError> {
    let h = ren.height() as u32;
    let img = image::RgbImage::from_fn(ren.width() as u32, h, |x, y| {
        let c = ren.get(x as usize, (h - 1 - y) as usize).unwrap_or_default();
        image::Rgb([c.r, c.g, c.b])
    });
    img.save(filename)
}

/// Compare two image files pixel for pixel
///
/// Differing pixels are logged in buffer coordinates.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let a = read_file(f1)?;
    let b = read_file(f2)?;
    if (a.width, a.height) != (b.width, b.height) {
        debug!("image sizes differ: {}x{} {}x{}", a.width, a.height, b.width, b.height);
        return Ok(false);
    }
    let mut differ = 0;
    for y in 0 .. a.height {
        for x in 0 .. a.width {
            let (pa, pb) = (a.get(x, y), b.get(x, y));
            if pa != pb {
                debug!("({},{}): {:?} {:?}", x, y, pa, pb);
                differ += 1;
            }
        }
    }
    if differ > 0 {
        debug!("{} of {} pixels differ", differ, a.width * a.height);
    }
    Ok(differ == 0)
}
