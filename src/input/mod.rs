mod events;

pub use events::{ClientEvent, map_event_to_action};
