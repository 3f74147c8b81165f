pub mod generate_cv;
