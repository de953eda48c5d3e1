pub mod ordinal_scale;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use ordinal_scale::OrdinalScale;
pub use scale::LinearScale;
pub use ticks::NiceStep;
pub use time_scale::{TimeInterval, TimeScale, TimeUnit};
pub use types::{AxisDimension, DomainValue};
