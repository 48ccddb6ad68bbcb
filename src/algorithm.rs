//! The pure colorspace math. Everything here operates on normalized
//! floating-point channels; fixed-point storages reach these functions
//! through the codec in [`crate::component`].

use crate::component::{lift, FloatComponent};

/// Clamp a channel into `[0.0, 1.0]`.
///
/// Only the fixed-point encoder calls this implicitly. Floating values are
/// allowed to wander out of range between conversions, so don't rely on
/// arithmetic elsewhere clamping for you.
#[inline]
pub fn saturate<T: FloatComponent>(value: T) -> T {
	value.min(T::one()).max(T::zero())
}

/// RGB to HSV. Hue comes back normalized into `[0.0, 1.0)`, not degrees.
///
/// Black short-circuits to `(0, 0, 0)` and achromatic input pins hue to 0,
/// so there is never a division by zero. Ties for the maximum channel break
/// red over green over blue.
pub fn rgb_to_hsv<T: FloatComponent>(r: T, g: T, b: T) -> (T, T, T) {
	let max = r.max(g.max(b));
	let min = r.min(g.min(b));
	let v = max;
	let delta = max - min;

	if max == T::zero() {
		return (T::zero(), T::zero(), T::zero());
	}
	let s = delta / max;

	let mut h = if delta == T::zero() {
		T::zero()
	} else if r == max {
		(g - b) / delta
	} else if g == max {
		lift::<T>(2.0) + (b - r) / delta
	} else {
		lift::<T>(4.0) + (r - g) / delta
	};

	h = h * lift(60.0);
	if h < T::zero() {
		h = h + lift(360.0);
	}

	(h / lift(360.0), s, v)
}

/// HSV to RGB. Hue is expected normalized in `[0.0, 1.0)`.
///
/// Zero saturation short-circuits to gray. Otherwise the hue is spread back
/// over six 60-degree sectors and the standard hexagon mapping picks the
/// channel order; the final arm also absorbs any out-of-range sector.
pub fn hsv_to_rgb<T: FloatComponent>(h: T, s: T, v: T) -> (T, T, T) {
	if s == T::zero() {
		return (v, v, v);
	}

	let sector = h * lift(360.0) / lift(60.0);
	let i = sector.floor();
	let f = sector - i;

	let one = T::one();
	let p = v * (one - s);
	let q = v * (one - s * f);
	let t = v * (one - s * (one - f));

	match i.to_i32() {
		Some(0) => (v, t, p),
		Some(1) => (q, v, p),
		Some(2) => (p, v, t),
		Some(3) => (p, q, v),
		Some(4) => (t, p, v),
		_ => (v, p, q),
	}
}

/// ITU-R BT.709 relative luminance.
pub fn luminance<T: FloatComponent>(r: T, g: T, b: T) -> T {
	lift::<T>(0.2126) * r + lift::<T>(0.7152) * g + lift::<T>(0.0722) * b
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_close(a: (f32, f32, f32), b: (f32, f32, f32)) {
		let tolerance = 1e-6;
		if (a.0 - b.0).abs() > tolerance
			|| (a.1 - b.1).abs() > tolerance
			|| (a.2 - b.2).abs() > tolerance
		{
			panic!(
				"assertion failed: `(left ~ right)`\n\tLeft: `{:?}`,\n\tRight:`{:?}`",
				a, b
			)
		}
	}

	#[test]
	fn rgb_to_hsv_simple() {
		// White. No saturation, full value
		let (_h, s, v) = rgb_to_hsv(1.0f32, 1.0, 1.0);
		assert_eq!((s, v), (0.0, 1.0));

		// Full red sits at the hue origin
		assert_eq!(rgb_to_hsv(1.0f32, 0.0, 0.0), (0.0, 1.0, 1.0));

		// Green is a third of the way around the wheel, blue two thirds
		assert_close(rgb_to_hsv(0.0f32, 1.0, 0.0), (1.0 / 3.0, 1.0, 1.0));
		assert_close(rgb_to_hsv(0.0f32, 0.0, 1.0), (2.0 / 3.0, 1.0, 1.0));
	}

	#[test]
	fn rgb_to_hsv_achromatic() {
		assert_eq!(rgb_to_hsv(0.0f32, 0.0, 0.0), (0.0, 0.0, 0.0));
		assert_eq!(rgb_to_hsv(0.5f32, 0.5, 0.5), (0.0, 0.0, 0.5));
	}

	#[test]
	fn rgb_to_hsv_negative_hue_wraps() {
		// Magenta-ish: red is max and blue beats green, which puts the raw
		// hue negative before the wrap
		let (h, _s, _v) = rgb_to_hsv(1.0f32, 0.0, 0.5);
		assert!((0.0..1.0).contains(&h), "hue {} escaped [0, 1)", h);
		assert_close(rgb_to_hsv(1.0, 0.0, 0.5), (11.0 / 12.0, 1.0, 1.0));
	}

	#[test]
	fn hsv_to_rgb_simple() {
		assert_eq!(hsv_to_rgb(0.0f32, 0.0, 1.0), (1.0, 1.0, 1.0));
		assert_eq!(hsv_to_rgb(0.0f32, 1.0, 1.0), (1.0, 0.0, 0.0));
		assert_close(hsv_to_rgb(1.0f32 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
		assert_close(hsv_to_rgb(2.0f32 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
	}

	#[test]
	fn hsv_round_trip() {
		let f64_close = |a: f64, b: f64| (a - b).abs() < 1e-6;

		for r in [0.0, 0.125, 0.438, 0.5, 0.875, 1.0] {
			for g in [0.0, 0.25, 0.5, 0.99, 1.0] {
				for b in [0.0, 0.1, 0.5, 0.75, 1.0] {
					let (h, s, v) = rgb_to_hsv(r, g, b);
					let (r2, g2, b2) = hsv_to_rgb(h, s, v);
					assert!(
						f64_close(r, r2) && f64_close(g, g2) && f64_close(b, b2),
						"({}, {}, {}) came back as ({}, {}, {})",
						r, g, b, r2, g2, b2
					);
				}
			}
		}
	}

	#[test]
	fn luminance_bt709() {
		assert!((luminance(1.0f64, 0.0, 0.0) - 0.2126).abs() < 1e-9);
		assert!((luminance(0.0f64, 1.0, 0.0) - 0.7152).abs() < 1e-9);
		assert!((luminance(0.0f64, 0.0, 1.0) - 0.0722).abs() < 1e-9);
		assert!((luminance(1.0f64, 1.0, 1.0) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn saturate_clamps() {
		assert_eq!(saturate(-0.25f32), 0.0);
		assert_eq!(saturate(0.25f32), 0.25);
		assert_eq!(saturate(1.25f32), 1.0);
	}
}
