//! Contract scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Contract` | Input job: start, duration, price |
//! | `Interval` | Derived `[start, end)` span used by the optimizer |
//! | `Schedule` | Chosen intervals with their total income |
//! | `Solution` | Optimal income and chosen contract IDs |

mod contract;
mod interval;
mod schedule;
mod solution;

pub use contract::Contract;
pub use interval::Interval;
pub use schedule::Schedule;
pub use solution::Solution;
