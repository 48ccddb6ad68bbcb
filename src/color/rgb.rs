use super::{out_of_range, Color, Gray, GrayAlpha, Hsv, Hsva};
use crate::component::Component;
use crate::Error;

/// Red, green, blue. No alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb<T: Component> {
	pub red: T,
	pub green: T,
	pub blue: T,
}

impl<T: Component> Rgb<T> {
	pub fn new(red: T, green: T, blue: T) -> Self {
		Rgb { red, green, blue }
	}

	pub fn with_alpha(self, alpha: T) -> Rgba<T> {
		Rgba::new(self.red, self.green, self.blue, alpha)
	}

	/// Change storage. Floats headed into fixed-point are clamped first.
	pub fn convert<U: Component>(self) -> Rgb<U> {
		Rgb::new(
			U::from_norm(self.red.as_norm()),
			U::from_norm(self.green.as_norm()),
			U::from_norm(self.blue.as_norm()),
		)
	}

	pub fn floats(self) -> Rgb<f32> {
		self.convert()
	}

	pub fn bytes(self) -> Rgb<u8> {
		self.convert()
	}
}

impl<T: Component> Color for Rgb<T> {
	type Component = T;
	const CHANNELS: usize = 3;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.red),
			1 => Ok(self.green),
			2 => Ok(self.blue),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => self.red = value,
			1 => self.green = value,
			2 => self.blue = value,
			index => return Err(out_of_range::<Self>(index)),
		}
		Ok(())
	}

	fn alpha(&self) -> Option<T> {
		None
	}
}

impl<T: Component> From<Gray<T>> for Rgb<T> {
	fn from(color: Gray<T>) -> Self {
		Rgb::new(color.gray, color.gray, color.gray)
	}
}

impl<T: Component> From<GrayAlpha<T>> for Rgb<T> {
	fn from(color: GrayAlpha<T>) -> Self {
		Rgb::new(color.gray, color.gray, color.gray)
	}
}

impl<T: Component> From<Rgba<T>> for Rgb<T> {
	fn from(color: Rgba<T>) -> Self {
		Rgb::new(color.red, color.green, color.blue)
	}
}

impl<T: Component> From<Hsv<T>> for Rgb<T> {
	fn from(color: Hsv<T>) -> Self {
		let (red, green, blue) = T::hsv_to_rgb(color.hue, color.saturation, color.value);
		Rgb::new(red, green, blue)
	}
}

impl<T: Component> From<Hsva<T>> for Rgb<T> {
	fn from(color: Hsva<T>) -> Self {
		let (red, green, blue) = T::hsv_to_rgb(color.hue, color.saturation, color.value);
		Rgb::new(red, green, blue)
	}
}

/// Red, green, blue, straight alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba<T: Component> {
	pub red: T,
	pub green: T,
	pub blue: T,
	pub alpha: T,
}

impl<T: Component> Rgba<T> {
	pub fn new(red: T, green: T, blue: T, alpha: T) -> Self {
		Rgba {
			red,
			green,
			blue,
			alpha,
		}
	}

	pub fn convert<U: Component>(self) -> Rgba<U> {
		Rgba::new(
			U::from_norm(self.red.as_norm()),
			U::from_norm(self.green.as_norm()),
			U::from_norm(self.blue.as_norm()),
			U::from_norm(self.alpha.as_norm()),
		)
	}

	pub fn floats(self) -> Rgba<f32> {
		self.convert()
	}

	pub fn bytes(self) -> Rgba<u8> {
		self.convert()
	}
}

impl<T: Component> Color for Rgba<T> {
	type Component = T;
	const CHANNELS: usize = 4;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<T, Error> {
		match index.into() {
			0 => Ok(self.red),
			1 => Ok(self.green),
			2 => Ok(self.blue),
			3 => Ok(self.alpha),
			index => Err(out_of_range::<Self>(index)),
		}
	}

	fn set_channel<I: Into<usize>>(&mut self, index: I, value: T) -> Result<(), Error> {
		match index.into() {
			0 => self.red = value,
			1 => self.green = value,
			2 => self.blue = value,
			3 => self.alpha = value,
			index => return Err(out_of_range::<Self>(index)),
		}
		Ok(())
	}

	fn alpha(&self) -> Option<T> {
		Some(self.alpha)
	}
}

impl<T: Component> From<Gray<T>> for Rgba<T> {
	fn from(color: Gray<T>) -> Self {
		Rgba::new(color.gray, color.gray, color.gray, T::OPAQUE)
	}
}

impl<T: Component> From<GrayAlpha<T>> for Rgba<T> {
	fn from(color: GrayAlpha<T>) -> Self {
		Rgba::new(color.gray, color.gray, color.gray, color.alpha)
	}
}

impl<T: Component> From<Rgb<T>> for Rgba<T> {
	fn from(color: Rgb<T>) -> Self {
		color.with_alpha(T::OPAQUE)
	}
}

impl<T: Component> From<Hsv<T>> for Rgba<T> {
	fn from(color: Hsv<T>) -> Self {
		Rgb::from(color).with_alpha(T::OPAQUE)
	}
}

impl<T: Component> From<Hsva<T>> for Rgba<T> {
	fn from(color: Hsva<T>) -> Self {
		let (red, green, blue) = T::hsv_to_rgb(color.hue, color.saturation, color.value);
		Rgba::new(red, green, blue, color.alpha)
	}
}
