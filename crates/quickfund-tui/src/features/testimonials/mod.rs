//! Testimonials carousel on the About section.

mod render;

use quickfund_core::carousel::Carousel;
use quickfund_core::content::{TESTIMONIALS, Testimonial};

pub use render::render_testimonials;

/// Manual-only carousel over the fixed testimonial list.
#[derive(Debug)]
pub struct TestimonialsState {
    pub carousel: Carousel<Testimonial>,
}

impl Default for TestimonialsState {
    fn default() -> Self {
        Self {
            carousel: Carousel::new(TESTIMONIALS.to_vec()),
        }
    }
}

impl TestimonialsState {
    pub fn current(&self) -> Option<&Testimonial> {
        self.carousel.current()
    }
}
