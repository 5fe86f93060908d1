pub mod drag;
pub mod manager;

pub use drag::{drag_out_to_remove, drop_to_add, DragPayload};
pub use manager::{AddOutcome, Favorites, STORAGE_KEY};
