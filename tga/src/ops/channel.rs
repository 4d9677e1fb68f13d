use log::trace;

use crate::common::pixel::saturate;
use crate::common::Channel;
use crate::image::Image;

impl Image {
    /// Copies `channel` into the other two channels of every pixel.
    pub fn only(&mut self, channel: Channel) -> &mut Self {
        trace!("Keeping only {} channel", channel);

        for pixel in self.pixels_mut() {
            let value = pixel.channel(channel);
            pixel.red = value;
            pixel.green = value;
            pixel.blue = value;
        }

        self
    }

    /// Adds `value` to `channel` of every pixel, saturating at 0 and 255.
    pub fn add(&mut self, channel: Channel, value: i32) -> &mut Self {
        trace!("Adding {} to {} channel", value, channel);
        self.map_channel(channel, |v| v + value as i64)
    }

    /// Multiplies `channel` of every pixel by `value`, saturating at 0 and 255.
    pub fn scale(&mut self, channel: Channel, value: i32) -> &mut Self {
        trace!("Scaling {} channel by {}", channel, value);
        self.map_channel(channel, |v| v * value as i64)
    }

    fn map_channel(&mut self, channel: Channel, f: impl Fn(i64) -> i64) -> &mut Self {
        for pixel in self.pixels_mut() {
            let v = pixel.channel_mut(channel);
            *v = saturate(f(*v as i64));
        }

        self
    }

    pub fn only_red(&mut self) -> &mut Self {
        self.only(Channel::Red)
    }

    pub fn only_green(&mut self) -> &mut Self {
        self.only(Channel::Green)
    }

    pub fn only_blue(&mut self) -> &mut Self {
        self.only(Channel::Blue)
    }

    pub fn add_red(&mut self, value: i32) -> &mut Self {
        self.add(Channel::Red, value)
    }

    pub fn add_green(&mut self, value: i32) -> &mut Self {
        self.add(Channel::Green, value)
    }

    pub fn add_blue(&mut self, value: i32) -> &mut Self {
        self.add(Channel::Blue, value)
    }

    pub fn scale_red(&mut self, value: i32) -> &mut Self {
        self.scale(Channel::Red, value)
    }

    pub fn scale_green(&mut self, value: i32) -> &mut Self {
        self.scale(Channel::Green, value)
    }

    pub fn scale_blue(&mut self, value: i32) -> &mut Self {
        self.scale(Channel::Blue, value)
    }
}
