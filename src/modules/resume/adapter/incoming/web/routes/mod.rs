pub mod cv_download;

pub use cv_download::download_cv_handler;
