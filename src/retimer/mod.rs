pub mod frame;
pub mod queue;
pub mod rate;
pub mod stage;

pub use frame::Frame;
pub use queue::SortedQueue;
pub use rate::RateConverter;
pub use stage::{ReorderingStage, StageState};
