pub mod config;
pub mod dates;
pub mod due;
pub mod messages;
pub mod persistence;
pub mod scan;
pub mod segment;
pub mod session;

pub use config::ComposerConfig;
pub use due::{DueDateOverrides, DueDaysPolicy};
pub use messages::{
    FridayDigest, GuidePhase, ReminderBlock, SectionBlock, build_end_of_session_reminders,
    build_friday_digest, build_watch_guide, build_weekly_digest,
};
pub use persistence::{
    RosterError, RosterFile, discover_roster, load_composer_config, load_due_date_overrides,
    load_due_days_policy, load_roster_dir, load_sessions_from_csv, validate_rows,
};
pub use scan::HolidayMarkers;
pub use segment::split_by_reset;
pub use session::SessionRow;
