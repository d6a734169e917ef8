// Domain layer: game payloads, their projection, and static board data.

pub mod countries;
pub mod payload;
pub mod projection;

pub use countries::{CountryMapEntry, country, countries};
pub use payload::{Reps, ServerMovePayload, Side};
pub use projection::{ProjectedViewState, project};
