mod appointment_service;

pub use appointment_service::{AppointmentService, FetchError};
