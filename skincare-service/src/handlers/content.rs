use crate::models::{BeforeAfter, Testimonial, BEFORE_AFTER, TESTIMONIALS};
use axum::Json;

pub async fn get_testimonials() -> Json<&'static [Testimonial]> {
    let testimonials: &'static [Testimonial] = &TESTIMONIALS;
    Json(testimonials)
}

pub async fn get_before_after() -> Json<&'static [BeforeAfter]> {
    let pairs: &'static [BeforeAfter] = &BEFORE_AFTER;
    Json(pairs)
}
