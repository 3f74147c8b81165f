pub mod service_offerings;
