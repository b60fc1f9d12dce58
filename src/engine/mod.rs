pub mod fill;
pub mod history;
pub mod score;

pub use fill::{flood_fill, region};
pub use history::History;
pub use score::Score;
