// Landing page routes
// Developed with 💀 by The Reachout Team (c)2025

mod contact;
mod error;
mod home;

pub use contact::ContactPage;
pub use error::ErrorPage;
pub use home::HomePage;
