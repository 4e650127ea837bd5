mod display_outcome;
mod sibling_path;
mod write_atomic;
mod write_backup;

pub use display_outcome::{display_field_width_warning, display_outcome};
pub use sibling_path::sibling_path;
pub use write_atomic::write_atomic;
pub use write_backup::write_backup;
