//! Channel storage: the traits a number must satisfy to sit in a channel,
//! and the codec between normalized floats and fixed-point integers.

use std::fmt;
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm;

/// Pull an `f64` into a floating storage type.
///
/// `f32` and `f64` are the only floating storages the codec understands; a
/// failed cast means the trait was implemented for something else, which is
/// a programming error rather than bad data.
pub(crate) fn lift<T: FloatComponent>(value: f64) -> T {
	match T::from(value) {
		Some(v) => v,
		None => panic!("channel codec requires f32 or f64 floating storage"),
	}
}

/// The other direction of [`lift`]. Same contract.
pub(crate) fn lower<T: FloatComponent>(value: T) -> f64 {
	match value.to_f64() {
		Some(v) => v,
		None => panic!("channel codec requires f32 or f64 floating storage"),
	}
}

/// Anything a channel can be stored in.
///
/// The colorspace hooks run in the component's own domain: floating storages
/// call straight into [`crate::algorithm`], fixed-point storages decode to
/// `f64`, run the math, and re-encode. Either way the outputs land inside
/// the storage's valid range.
pub trait Component: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
	/// Fully opaque alpha in this storage domain.
	const OPAQUE: Self;

	/// This channel as a normalized `f64`. Decodes fixed-point storage;
	/// floating storage passes through unclamped.
	fn as_norm(self) -> f64;

	/// Build a channel from a normalized `f64`. Encoding into fixed-point
	/// saturates first; floating storage is a plain cast.
	fn from_norm(norm: f64) -> Self;

	fn rgb_to_hsv(r: Self, g: Self, b: Self) -> (Self, Self, Self);

	fn hsv_to_rgb(h: Self, s: Self, v: Self) -> (Self, Self, Self);

	fn luminance(r: Self, g: Self, b: Self) -> Self;
}

/// Floating channel storage, nominally in `[0.0, 1.0]`.
pub trait FloatComponent: Component + Float {}

/// Fixed-point channel storage: an unsigned integer where 0 is 0.0 and the
/// maximum representable value is 1.0.
pub trait Encoded: Component + Eq + Ord + Hash {
	const MAX: Self;

	/// `self / MAX`. Always lands in `[0.0, 1.0]`.
	fn decode<T: FloatComponent>(self) -> T;

	/// Saturate to `[0.0, 1.0]`, scale by `MAX`, truncate.
	fn encode<T: FloatComponent>(value: T) -> Self;
}

macro_rules! impl_float_component {
	($float:ty) => {
		impl Component for $float {
			const OPAQUE: Self = 1.0;

			fn as_norm(self) -> f64 {
				self as f64
			}

			fn from_norm(norm: f64) -> Self {
				norm as $float
			}

			fn rgb_to_hsv(r: Self, g: Self, b: Self) -> (Self, Self, Self) {
				algorithm::rgb_to_hsv(r, g, b)
			}

			fn hsv_to_rgb(h: Self, s: Self, v: Self) -> (Self, Self, Self) {
				algorithm::hsv_to_rgb(h, s, v)
			}

			fn luminance(r: Self, g: Self, b: Self) -> Self {
				algorithm::luminance(r, g, b)
			}
		}

		impl FloatComponent for $float {}
	};
}

impl_float_component!(f32);
impl_float_component!(f64);

macro_rules! impl_encoded_component {
	($int:ty) => {
		impl Component for $int {
			const OPAQUE: Self = <$int>::MAX;

			fn as_norm(self) -> f64 {
				self.decode()
			}

			fn from_norm(norm: f64) -> Self {
				Self::encode(norm)
			}

			fn rgb_to_hsv(r: Self, g: Self, b: Self) -> (Self, Self, Self) {
				let (h, s, v) =
					algorithm::rgb_to_hsv::<f64>(r.decode(), g.decode(), b.decode());
				(Self::encode(h), Self::encode(s), Self::encode(v))
			}

			fn hsv_to_rgb(h: Self, s: Self, v: Self) -> (Self, Self, Self) {
				let (r, g, b) =
					algorithm::hsv_to_rgb::<f64>(h.decode(), s.decode(), v.decode());
				(Self::encode(r), Self::encode(g), Self::encode(b))
			}

			fn luminance(r: Self, g: Self, b: Self) -> Self {
				Self::encode(algorithm::luminance::<f64>(
					r.decode(),
					g.decode(),
					b.decode(),
				))
			}
		}

		impl Encoded for $int {
			const MAX: Self = <$int>::MAX;

			fn decode<T: FloatComponent>(self) -> T {
				// f64 holds every u32 exactly, so the ratio is computed
				// there and cast once into the requested storage
				lift(self as f64 / <$int>::MAX as f64)
			}

			fn encode<T: FloatComponent>(value: T) -> Self {
				(lower(algorithm::saturate(value)) * <$int>::MAX as f64) as $int
			}
		}
	};
}

impl_encoded_component!(u8);
impl_encoded_component!(u16);
impl_encoded_component!(u32);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_endpoints() {
		assert_eq!(0u8.decode::<f32>(), 0.0);
		assert_eq!(255u8.decode::<f32>(), 1.0);
		assert_eq!(u16::MAX.decode::<f64>(), 1.0);
		assert_eq!(u32::MAX.decode::<f32>(), 1.0);
	}

	#[test]
	fn encode_saturates() {
		assert_eq!(u8::encode(-0.5f32), u8::encode(0.0f32));
		assert_eq!(u8::encode(1.5f32), u8::encode(1.0f32));
		assert_eq!(u16::encode(-0.5f64), 0);
		assert_eq!(u32::encode(2.0f64), u32::MAX);
	}

	#[test]
	fn encode_truncates() {
		// 0.5 * 255 = 127.5, which truncates rather than rounds
		assert_eq!(u8::encode(0.5f32), 127);
	}

	#[test]
	fn round_trip_within_one_ulp() {
		// quantization may lose up to one step of the integer width
		fn assay<E: Encoded>(x: f64, step: f64) {
			let back: f64 = E::encode(x).decode();
			assert!(
				(back - x).abs() <= step,
				"{} came back as {} (step {})",
				x,
				back,
				step
			);
		}

		for i in 0..=1000 {
			let x = i as f64 / 1000.0;
			assay::<u8>(x, 1.0 / u8::MAX as f64);
			assay::<u16>(x, 1.0 / u16::MAX as f64);
			assay::<u32>(x, 1.0 / u32::MAX as f64);
		}
	}

	#[test]
	fn opaque_is_domain_max() {
		assert_eq!(u8::OPAQUE, 255);
		assert_eq!(u16::OPAQUE, u16::MAX);
		assert_eq!(f32::OPAQUE, 1.0);
	}
}
