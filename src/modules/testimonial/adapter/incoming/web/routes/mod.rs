pub mod testimonials;

pub use testimonials::{
    create_testimonial_handler, delete_testimonial_handler, get_admin_testimonials_handler,
    get_testimonials_handler, update_testimonial_handler,
};
