mod favorite;
mod lenient;
mod match_record;
mod status;

pub use favorite::*;
pub use match_record::*;
pub use status::*;
