use super::{out_of_range, Color, Rgb, Rgba};
use crate::component::Component;
use crate::Error;

/// A single luminance channel, no alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gray<T: Component> {
	pub gray: T,
}

impl<T: Component> Gray<T> {
	pub fn new(gray: T) -> Self {
		Gray { gray }
	}

	pub fn with_alpha(self, alpha: T) -> GrayAlpha<T> {
		GrayAlpha::new(self.gray, alpha)
	}

	/// Change storage. Floats headed into fixed-point are clamped first.
	pub fn convert<U: Component>(self) -> Gray<U> {
		Gray::new(U::from_norm(self.gray.as_norm()))
	}

	pub fn floats(self) -> Gray<f32> {
		self.convert()
	}

	pub fn bytes(self) -> Gray<u8> {
		self.convert()
	}
}

impl<T: Component> Color for Gray<T> {
	type Component = T;
	const CHANNELS: usize = 1;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.gray),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => {
				self.gray = value;
				Ok(())
			}
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn alpha(&self) -> Option<T> {
		None
	}
}

impl<T: Component> From<GrayAlpha<T>> for Gray<T> {
	fn from(color: GrayAlpha<T>) -> Self {
		Gray::new(color.gray)
	}
}

impl<T: Component> From<Rgb<T>> for Gray<T> {
	fn from(color: Rgb<T>) -> Self {
		Gray::new(T::luminance(color.red, color.green, color.blue))
	}
}

impl<T: Component> From<Rgba<T>> for Gray<T> {
	fn from(color: Rgba<T>) -> Self {
		Gray::new(T::luminance(color.red, color.green, color.blue))
	}
}

/// Luminance plus straight alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GrayAlpha<T: Component> {
	pub gray: T,
	pub alpha: T,
}

impl<T: Component> GrayAlpha<T> {
	pub fn new(gray: T, alpha: T) -> Self {
		GrayAlpha { gray, alpha }
	}

	pub fn convert<U: Component>(self) -> GrayAlpha<U> {
		GrayAlpha::new(U::from_norm(self.gray.as_norm()), U::from_norm(self.alpha.as_norm()))
	}

	pub fn floats(self) -> GrayAlpha<f32> {
		self.convert()
	}

	pub fn bytes(self) -> GrayAlpha<u8> {
		self.convert()
	}
}

impl<T: Component> Color for GrayAlpha<T> {
	type Component = T;
	const CHANNELS: usize = 2;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.gray),
			1 => Ok(self.alpha),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => self.gray = value,
			1 => self.alpha = value,
			index => return Err(out_of_range::<Self>(index)),
		}
		Ok(())
	}

	fn alpha(&self) -> Option<T> {
		Some(self.alpha)
	}
}

impl<T: Component> From<Gray<T>> for GrayAlpha<T> {
	fn from(color: Gray<T>) -> Self {
		GrayAlpha::new(color.gray, T::OPAQUE)
	}
}

impl<T: Component> From<Rgb<T>> for GrayAlpha<T> {
	fn from(color: Rgb<T>) -> Self {
		Gray::from(color).into()
	}
}

impl<T: Component> From<Rgba<T>> for GrayAlpha<T> {
	fn from(color: Rgba<T>) -> Self {
		GrayAlpha::new(T::luminance(color.red, color.green, color.blue), color.alpha)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::GrayChannel;

	#[test]
	fn channel_shape() {
		let gray = Gray::new(0.5f32);
		assert_eq!(Gray::<f32>::CHANNELS, 1);
		assert!(!gray.has_alpha());

		let ga = gray.with_alpha(1.0);
		assert_eq!(GrayAlpha::<f32>::CHANNELS, 2);
		assert!(ga.has_alpha());
		assert!(ga.is_opaque());
		assert!(gray.is_transparent());
	}

	#[test]
	fn checked_access() {
		let mut ga = GrayAlpha::new(10u8, 20);
		assert_eq!(ga.channel(GrayChannel::Gray), Ok(10));
		assert_eq!(ga.channel(GrayChannel::Alpha), Ok(20));
		assert_eq!(
			ga.channel(5usize),
			Err(Error::ChannelOutOfRange { index: 5, channels: 2 })
		);

		ga.set_channel(GrayChannel::Alpha, 255).unwrap();
		assert!(ga.is_opaque());
		assert!(ga.set_channel(2usize, 0).is_err());
	}

	#[test]
	fn luminance_of_white_is_full() {
		let gray: Gray<f64> = Rgb::new(1.0, 1.0, 1.0).into();
		assert!((gray.gray - 1.0).abs() < 1e-9);

		// quantization may land one step under full white
		let bytes: Gray<u8> = Rgb::new(255u8, 255, 255).into();
		assert!(bytes.gray >= 254);
	}

	#[test]
	fn rgba_alpha_survives() {
		let ga: GrayAlpha<f32> = Rgba::new(0.5, 0.5, 0.5, 0.25).into();
		assert_eq!(ga.alpha, 0.25);
	}
}
