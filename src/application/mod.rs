// Tracker state and actions driven by the UI
pub mod tracker_session;

pub use tracker_session::TrackerSession;
