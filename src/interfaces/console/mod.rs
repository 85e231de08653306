//! Text front-ends for operators

pub mod batch;
pub mod menu;

pub use batch::{run_contractor_batch, write_plan, write_summary};
pub use menu::{AdminMenu, MenuChoice, MENU_PROMPT};
