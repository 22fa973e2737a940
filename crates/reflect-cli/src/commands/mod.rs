mod entries;
mod init;
mod misc;
mod stats;

pub use entries::{
    handle_add, handle_delete, handle_edit, handle_favorite, handle_list, handle_show,
};
pub use init::handle_init;
pub use misc::handle_completions;
pub use stats::handle_stats;
