//! Readout for handing colors to platform toolkits and surface crates.
//!
//! The core stops at channel values; something else owns the window. This
//! module converts any color value into the two shapes those collaborators
//! usually want: straight-alpha floating RGBA for a platform color
//! constructor, and a packed `0xAARRGGBB` pixel for softbuffer-style
//! surfaces.

use crate::color::{Gray, GrayAlpha, Hsv, Hsva, Rgb, Rgba};
use crate::component::Component;

pub trait Bridge {
	/// Straight-alpha RGBA in floating storage.
	fn rgba_f32(&self) -> [f32; 4];

	/// `0xAARRGGBB`, the layout softbuffer-like surfaces take.
	fn packed(&self) -> u32 {
		let [r, g, b, a] = self.rgba_f32();
		u32::from_be_bytes([
			u8::from_norm(a as f64),
			u8::from_norm(r as f64),
			u8::from_norm(g as f64),
			u8::from_norm(b as f64),
		])
	}
}

macro_rules! impl_bridge {
	($color:ident) => {
		impl<T: Component> Bridge for $color<T> {
			fn rgba_f32(&self) -> [f32; 4] {
				let c: Rgba<f32> = Rgba::from(*self).convert();
				[c.red, c.green, c.blue, c.alpha]
			}
		}
	};
}

impl_bridge!(Gray);
impl_bridge!(GrayAlpha);
impl_bridge!(Rgb);
impl_bridge!(Rgba);
impl_bridge!(Hsv);
impl_bridge!(Hsva);
