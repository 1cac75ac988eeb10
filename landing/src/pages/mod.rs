// Landing page screens
// Developed with 🎬 by The ReelForge Team (c)2025

mod home;

pub use home::HomePage;
