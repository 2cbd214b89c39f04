//! Render payload DTOs emitted to the presentation layer

mod detail;
mod listing;

pub use detail::{ChartData, DetailPayload, FieldRow, NavEntry, Navigation};
pub use listing::{IndexPayload, ListItem, ListPayload, PageInfo};
