mod footer;
mod header;
mod input;
mod spinner;

pub use footer::Footer;
pub use header::Header;
pub use input::InputBox;
pub use spinner::Spinner;
