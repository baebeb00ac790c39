//! Rotating profile picture.

use std::time::Duration;

/// Time between image swaps.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);
/// Fade-out time before the source is swapped.
pub const FADE_DURATION: Duration = Duration::from_millis(400);

/// Cycles through the profile images in order.
///
/// A swap is a fade-out (`begin_fade`) followed by `finish_fade`, which
/// advances and fades back in. Pausing in between restores the current
/// image without advancing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRotation {
    images: Vec<String>,
    next: usize,
    faded: bool,
}

impl ImageRotation {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            next: 0,
            faded: false,
        }
    }

    /// The image to show now, advancing the cycle. `None` without images.
    pub fn advance(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        let index = self.next;
        self.next = (self.next + 1) % self.images.len();
        Some(&self.images[index])
    }

    /// Rotation only runs when there is more than one image.
    pub fn is_enabled(&self) -> bool {
        self.images.len() > 1
    }

    pub fn begin_fade(&mut self) {
        self.faded = true;
    }

    /// Advance to the next image and fade it in.
    pub fn finish_fade(&mut self) -> Option<&str> {
        self.faded = false;
        self.advance()
    }

    /// Stop a swap in progress and show the current image again.
    pub fn pause(&mut self) {
        self.faded = false;
    }

    /// The picture is currently faded out.
    pub fn is_faded(&self) -> bool {
        self.faded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut rotation = ImageRotation::new(vec!["1.jpg".into(), "2.jpg".into()]);
        assert_eq!(rotation.advance(), Some("1.jpg"));
        assert_eq!(rotation.advance(), Some("2.jpg"));
        assert_eq!(rotation.advance(), Some("1.jpg"));
        assert!(rotation.is_enabled());
    }

    #[test]
    fn empty_rotation_yields_nothing() {
        let mut rotation = ImageRotation::new(Vec::new());
        assert_eq!(rotation.advance(), None);
        assert!(!rotation.is_enabled());
        assert_eq!(rotation.finish_fade(), None);
        assert!(!rotation.is_faded());
    }

    #[test]
    fn fade_swaps_to_next_image() {
        let mut rotation = ImageRotation::new(vec!["1.jpg".into(), "2.jpg".into()]);
        rotation.begin_fade();
        assert!(rotation.is_faded());
        assert_eq!(rotation.finish_fade(), Some("1.jpg"));
        assert!(!rotation.is_faded());
    }

    #[test]
    fn pause_mid_fade_restores_picture() {
        let mut rotation = ImageRotation::new(vec!["1.jpg".into(), "2.jpg".into()]);
        rotation.begin_fade();
        rotation.pause();
        assert!(!rotation.is_faded());

        // the interrupted swap did not skip an image
        rotation.begin_fade();
        assert_eq!(rotation.finish_fade(), Some("1.jpg"));
    }
}
