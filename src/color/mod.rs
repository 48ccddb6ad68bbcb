mod gray;
mod hsv;
mod rgb;

pub use gray::{Gray, GrayAlpha};
pub use hsv::{Hsv, Hsva};
pub use rgb::{Rgb, Rgba};

use std::fmt;

use crate::component::Component;
use crate::Error;

/// Shared surface of the six color value types.
///
/// Named fields are the primary API; the indexed accessors exist for code
/// that walks channels generically. Indexing is checked: anything outside
/// `[0, CHANNELS)` reports [`Error::ChannelOutOfRange`].
pub trait Color: Copy {
	type Component: Component;

	/// Stored channels, alpha included. Fixed per variant.
	const CHANNELS: usize;

	fn channel<I: Into<usize>>(&self, index: I) -> Result<Self::Component, Error>;

	fn set_channel<I: Into<usize>>(
		&mut self,
		index: I,
		value: Self::Component,
	) -> Result<(), Error>;

	/// The alpha channel, if this variant stores one.
	fn alpha(&self) -> Option<Self::Component>;

	fn has_alpha(&self) -> bool {
		self.alpha().is_some()
	}

	/// True only when an alpha channel is present and fully opaque.
	fn is_opaque(&self) -> bool {
		self.alpha() == Some(Self::Component::OPAQUE)
	}

	fn is_transparent(&self) -> bool {
		!self.is_opaque()
	}
}

pub(crate) fn out_of_range<C: Color>(index: usize) -> Error {
	Error::ChannelOutOfRange {
		index,
		channels: C::CHANNELS,
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GrayChannel {
	Gray,
	Alpha,
}

impl fmt::Display for GrayChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GrayChannel::Gray => write!(f, "gray"),
			GrayChannel::Alpha => write!(f, "alpha"),
		}
	}
}

impl From<GrayChannel> for usize {
	fn from(c: GrayChannel) -> usize {
		match c {
			GrayChannel::Gray => 0,
			GrayChannel::Alpha => 1,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RgbChannel {
	Red,
	Green,
	Blue,
	Alpha,
}

impl fmt::Display for RgbChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RgbChannel::Red => write!(f, "red"),
			RgbChannel::Green => write!(f, "green"),
			RgbChannel::Blue => write!(f, "blue"),
			RgbChannel::Alpha => write!(f, "alpha"),
		}
	}
}

impl From<RgbChannel> for usize {
	fn from(c: RgbChannel) -> usize {
		match c {
			RgbChannel::Red => 0,
			RgbChannel::Green => 1,
			RgbChannel::Blue => 2,
			RgbChannel::Alpha => 3,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HsvChannel {
	Hue,
	Saturation,
	Value,
	Alpha,
}

impl fmt::Display for HsvChannel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HsvChannel::Hue => write!(f, "hue"),
			HsvChannel::Saturation => write!(f, "saturation"),
			HsvChannel::Value => write!(f, "value"),
			HsvChannel::Alpha => write!(f, "alpha"),
		}
	}
}

impl From<HsvChannel> for usize {
	fn from(c: HsvChannel) -> usize {
		match c {
			HsvChannel::Hue => 0,
			HsvChannel::Saturation => 1,
			HsvChannel::Value => 2,
			HsvChannel::Alpha => 3,
		}
	}
}
