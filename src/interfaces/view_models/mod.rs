pub mod tracker_view_model;
