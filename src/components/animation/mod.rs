mod driver;
mod marker;
mod scheduler;

pub use driver::subscribe;
pub use marker::{LoopMarker, flow_dash_offset};
pub use scheduler::{AnimationScheduler, FrameListener, FrameTick, Subscription, drive};
