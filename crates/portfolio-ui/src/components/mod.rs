//! Reusable UI components for the portfolio page

mod button;
mod category_pills;
mod contact_form;
mod project_card;
mod skill_bar;
mod social_links;
mod theme_toggle;
mod typewriter;

pub use button::*;
pub use category_pills::*;
pub use contact_form::*;
pub use project_card::*;
pub use skill_bar::*;
pub use social_links::*;
pub use theme_toggle::*;
pub use typewriter::*;
