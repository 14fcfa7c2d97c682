pub mod booking;
pub mod results;
pub mod stats;
pub mod tutor;

pub use booking::*;
pub use results::*;
pub use stats::*;
pub use tutor::*;
