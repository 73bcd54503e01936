mod disjoint;
mod exchange;
mod signum;
mod source;
mod stream;
mod traits;
mod view;
#[cfg(feature = "serde_support")]
mod serde;

pub use disjoint::DisjointView;
pub use exchange::{ChunkedInt, ExchangeInt, SuccinctInt};
pub use signum::Signum;
pub use source::Source;
pub use stream::{Stream, StreamState};
pub use traits::{Signed, Unsigned};
pub use view::View;
