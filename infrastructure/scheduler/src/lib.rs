mod tokio_timeline;

pub use tokio_timeline::{TimelineDelays, TokioOrderTimeline};
