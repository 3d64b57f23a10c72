mod handler;

pub use handler::{Action, EventHandler, PAGE_SCROLL};
