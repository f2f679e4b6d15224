pub mod friday;
pub mod reminders;
pub mod watchby;
pub mod weekly;

pub use friday::{FridayDigest, SectionBlock, build_friday_digest};
pub use reminders::{ReminderBlock, build_end_of_session_reminders};
pub use watchby::{GuidePhase, build_watch_guide};
pub use weekly::build_weekly_digest;
