//! Disk-seek domain models.
//!
//! Provides the input and output types shared by every seek algorithm.
//! Positions live on an abstract 1-D track; nothing here touches a real
//! device.
//!
//! # Domain Mappings
//!
//! | u-seek | Disk | Tape | Elevator |
//! |--------|------|------|----------|
//! | Position | Cylinder | Block offset | Floor |
//! | Head | Read/write arm | Tape head | Car |
//! | Disk size | Cylinder count | Tape length | Floor count |
//! | SeekResult | Arm movement plan | Wind plan | Stop sequence |

mod request;
mod result;

pub use request::{Position, SeekRequest, DEFAULT_DISK_SIZE};
pub use result::{plan_distance, SeekResult};
