// Reusable building blocks for the landing sections
// Developed by the Qreater team (c)2025

mod anchor;
mod command_box;
mod cta_box;
mod rich_text;
mod scenario_box;
mod scheduler;

pub use anchor::scroll_to_anchor;
pub use command_box::CommandBox;
pub use cta_box::CtaBox;
pub use rich_text::RichText;
pub use scenario_box::ScenarioBox;
pub use scheduler::BrowserScheduler;
