mod layout;
mod welcome;

pub use layout::PageLayout;
pub use welcome::Welcome;
