mod origin;
mod runtime;
mod spec;

pub use origin::Origin;
pub use runtime::*;
pub use spec::*;
