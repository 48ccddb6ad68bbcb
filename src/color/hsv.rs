use super::{out_of_range, Color, Rgb, Rgba};
use crate::component::Component;
use crate::Error;

/// Hue, saturation, value.
///
/// Hue is stored normalized: `[0.0, 1.0)` of a full turn, never raw degrees.
/// That keeps every channel on the same `[0, 1]` contract, so fixed-point
/// storage treats hue like any other channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsv<T: Component> {
	pub hue: T,
	pub saturation: T,
	pub value: T,
}

impl<T: Component> Hsv<T> {
	pub fn new(hue: T, saturation: T, value: T) -> Self {
		Hsv {
			hue,
			saturation,
			value,
		}
	}

	pub fn with_alpha(self, alpha: T) -> Hsva<T> {
		Hsva::new(self.hue, self.saturation, self.value, alpha)
	}

	pub fn convert<U: Component>(self) -> Hsv<U> {
		Hsv::new(
			U::from_norm(self.hue.as_norm()),
			U::from_norm(self.saturation.as_norm()),
			U::from_norm(self.value.as_norm()),
		)
	}

	pub fn floats(self) -> Hsv<f32> {
		self.convert()
	}

	pub fn bytes(self) -> Hsv<u8> {
		self.convert()
	}
}

impl<T: Component> Color for Hsv<T> {
	type Component = T;
	const CHANNELS: usize = 3;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.hue),
			1 => Ok(self.saturation),
			2 => Ok(self.value),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => self.hue = value,
			1 => self.saturation = value,
			2 => self.value = value,
			index => return Err(out_of_range::<Self>(index)),
		}
		Ok(())
	}

	fn alpha(&self) -> Option<T> {
		None
	}
}

impl<T: Component> From<Rgb<T>> for Hsv<T> {
	fn from(color: Rgb<T>) -> Self {
		let (hue, saturation, value) = T::rgb_to_hsv(color.red, color.green, color.blue);
		Hsv::new(hue, saturation, value)
	}
}

impl<T: Component> From<Rgba<T>> for Hsv<T> {
	fn from(color: Rgba<T>) -> Self {
		Rgb::from(color).into()
	}
}

impl<T: Component> From<Hsva<T>> for Hsv<T> {
	fn from(color: Hsva<T>) -> Self {
		Hsv::new(color.hue, color.saturation, color.value)
	}
}

/// Hue, saturation, value, straight alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsva<T: Component> {
	pub hue: T,
	pub saturation: T,
	pub value: T,
	pub alpha: T,
}

impl<T: Component> Hsva<T> {
	pub fn new(hue: T, saturation: T, value: T, alpha: T) -> Self {
		Hsva {
			hue,
			saturation,
			value,
			alpha,
		}
	}

	pub fn convert<U: Component>(self) -> Hsva<U> {
		Hsva::new(
			U::from_norm(self.hue.as_norm()),
			U::from_norm(self.saturation.as_norm()),
			U::from_norm(self.value.as_norm()),
			U::from_norm(self.alpha.as_norm()),
		)
	}

	pub fn floats(self) -> Hsva<f32> {
		self.convert()
	}

	pub fn bytes(self) -> Hsva<u8> {
		self.convert()
	}
}

impl<T: Component> Color for Hsva<T> {
	type Component = T;
	const CHANNELS: usize = 4;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.hue),
			1 => Ok(self.saturation),
			2 => Ok(self.value),
			3 => Ok(self.alpha),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => self.hue = value,
			1 => self.saturation = value,
			2 => self.value = value,
			3 => self.alpha = value,
			index => return Err(out_of_range::<Self>(index)),
		}
		Ok(())
	}

	fn alpha(&self) -> Option<T> {
		Some(self.alpha)
	}
}

impl<T: Component> From<Hsv<T>> for Hsva<T> {
	fn from(color: Hsv<T>) -> Self {
		color.with_alpha(T::OPAQUE)
	}
}

impl<T: Component> From<Rgb<T>> for Hsva<T> {
	fn from(color: Rgb<T>) -> Self {
		Hsv::from(color).with_alpha(T::OPAQUE)
	}
}

impl<T: Component> From<Rgba<T>> for Hsva<T> {
	fn from(color: Rgba<T>) -> Self {
		let (hue, saturation, value) = T::rgb_to_hsv(color.red, color.green, color.blue);
		Hsva::new(hue, saturation, value, color.alpha)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::HsvChannel;

	#[test]
	fn channel_shape() {
		assert_eq!(Hsv::<f32>::CHANNELS, 3);
		assert_eq!(Hsva::<f32>::CHANNELS, 4);
		assert!(!Hsv::new(0.0f32, 0.0, 0.0).has_alpha());
		assert!(Hsva::new(0.0f32, 0.0, 0.0, 1.0).has_alpha());
	}

	#[test]
	fn hue_stays_normalized() {
		// every corner of the RGB cube keeps hue inside [0, 1)
		for r in [0.0f64, 1.0] {
			for g in [0.0f64, 1.0] {
				for b in [0.0f64, 1.0] {
					let hsv: Hsv<f64> = Rgb::new(r, g, b).into();
					assert!(
						(0.0..1.0).contains(&hsv.hue),
						"rgb({}, {}, {}) gave hue {}",
						r, g, b, hsv.hue
					);
				}
			}
		}
	}

	#[test]
	fn alpha_passes_through() {
		let hsva: Hsva<f32> = Rgba::new(0.2, 0.4, 0.8, 0.3).into();
		assert_eq!(hsva.alpha, 0.3);

		let hsv = Hsv::from(hsva);
		assert_eq!(hsv.channel(HsvChannel::Value), Ok(0.8));
		assert_eq!(hsv.alpha(), None);
	}

	#[test]
	fn alpha_index_rejected_without_alpha() {
		let hsv = Hsv::new(0.0f32, 0.0, 0.0);
		assert_eq!(
			hsv.channel(HsvChannel::Alpha),
			Err(Error::ChannelOutOfRange { index: 3, channels: 3 })
		);
	}
}
