//! Strongly-typed color values in gray, RGB, and HSV, each optionally
//! carrying alpha and each generic over its channel storage.
//!
//! Channels live in one of two storage domains: floating ([`f32`]/[`f64`],
//! nominally in `[0.0, 1.0]`) or fixed-point ([`u8`]/[`u16`]/[`u32`], where
//! the integer range maps onto `[0.0, 1.0]`). Every conversion decodes into
//! floating storage, runs the colorspace math there, and re-encodes, so any
//! value a conversion hands back is already within its domain's bounds.
//!
//! ```
//! use tinge::{Hsv, Rgb};
//!
//! let teal = Rgb::new(0.0f32, 0.5, 0.5);
//! let hsv: Hsv<f32> = teal.into();
//! let bytes: Rgb<u8> = Rgb::from(hsv).bytes();
//! assert_eq!(bytes, Rgb::new(0, 127, 127));
//! ```

mod algorithm;
mod color;
mod component;

#[cfg(feature = "bridge")]
pub mod bridge;

pub use algorithm::{hsv_to_rgb, luminance, rgb_to_hsv, saturate};
pub use color::{
	Color, Gray, GrayAlpha, GrayChannel, Hsv, HsvChannel, Hsva, Rgb, RgbChannel, Rgba,
};
pub use component::{Component, Encoded, FloatComponent};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("channel index {index} out of range; this color has {channels} channels")]
	ChannelOutOfRange { index: usize, channels: usize },
}
