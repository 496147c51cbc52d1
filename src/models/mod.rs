pub mod icon;
pub mod mode;
pub mod slot;

pub use icon::{IconDefinition, IconFile};
pub use mode::{mode_name_from_raw, ContentKind, SlotMode};
pub use slot::Slot;
