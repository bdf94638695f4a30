pub mod appointments_view;


pub use appointments_view::AppointmentsView;
