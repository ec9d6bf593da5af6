mod shared_cell;
mod shared_error;

pub use shared_cell::SharedCell;
pub use shared_error::SharedError;
