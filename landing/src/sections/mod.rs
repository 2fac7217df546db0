// Landing page sections
// Developed with 💀 by The Reachout Team (c)2025

mod benefits;
mod book_demo;
mod contact;
mod cta;
mod demo_form;
mod footer;
mod hero;
mod integrations;
mod nav;
mod snackbar;
mod solutions;
mod statistics;
mod whatsapp_button;
mod why_choose_us;

pub use benefits::Benefits;
pub use book_demo::BookDemoModal;
pub use contact::Contact;
pub use cta::DemoCta;
pub use demo_form::DemoForm;
pub use footer::Footer;
pub use hero::Hero;
pub use integrations::Integrations;
pub use nav::Nav;
pub use snackbar::Snackbar;
pub use solutions::Solutions;
pub use statistics::Statistics;
pub use whatsapp_button::WhatsAppButton;
pub use why_choose_us::WhyChooseUs;
