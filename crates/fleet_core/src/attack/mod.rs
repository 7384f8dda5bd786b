//! Attack resolution.

mod context;
mod power;
pub mod shelling;

pub use context::{AirState, Engagement, Formation};
pub use power::{AttackPower, AttackPowerParams};
