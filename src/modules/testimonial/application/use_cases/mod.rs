pub mod list_testimonials;
pub mod save_testimonial;
