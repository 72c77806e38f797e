// Landing page routes
// Developed by the Qreater team (c)2025

mod home;

pub use home::HomePage;
