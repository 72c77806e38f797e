// Landing page sections
// Developed by the Qreater team (c)2025

/// Project documentation (README table of contents)
pub const DOCS_URL: &str = "https://github.com/qreater/HelmInspect?tab=readme-ov-file#table-of-contents";
pub const ORG_URL: &str = "https://github.com/qreater";

mod hero;
mod how;
mod nav;
mod why;

pub use hero::Hero;
pub use how::How;
pub use nav::Nav;
pub use why::Why;
