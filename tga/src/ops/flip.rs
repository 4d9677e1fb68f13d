use crate::image::Image;

impl Image {
    /// Reverses the flat pixel sequence: the last pixel becomes the first.
    ///
    /// On row-major data this is a 180° rotation, not a vertical or
    /// horizontal mirror. Width and height are unchanged.
    pub fn flip(&mut self) -> &mut Self {
        self.pixels_mut().reverse();
        self
    }
}
