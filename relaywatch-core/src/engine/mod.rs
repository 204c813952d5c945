//! Run driver.
//!
//! An [`Engine`] holds the settings and classifier shared by every run. Each run is a [`Run`]: it
//! owns its aggregate state, accepts stream chunks one at a time and is consumed by
//! [`Run::finish`], which produces the [`Summary`](crate::summary::Summary). A caller may stop
//! feeding chunks at any boundary and still finish the run into a partial summary.

mod diagnostics;
mod driver;
mod run;


pub use driver::*;
pub use run::*;
