//! Cross-component integration flows.

mod flows;
mod index_race;
