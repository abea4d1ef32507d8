//! Landing page sections, top to bottom.
//!
//! ```text
//! LandingPage
//! ├── Hero
//! ├── CodePreview
//! ├── Team
//! │   └── FounderCard (per founder)
//! ├── Booking
//! │   └── Calendar
//! └── Footer
//! ```

mod booking;
mod code_preview;
mod footer;
mod hero;
mod team;

pub use booking::Booking;
pub use code_preview::CodePreview;
pub use footer::{CONTACT_EMAIL, COPYRIGHT, Footer};
pub use hero::Hero;
pub use team::Team;
