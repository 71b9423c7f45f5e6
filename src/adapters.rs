//! Adapter inputs: the archetype-agnostic envelope handed to realisation layers.

mod debug;
mod input;

pub use self::debug::{DebugAdapterSummary, DebugPart, debug_ascii, debug_summary};
pub use self::input::{
    AdapterInput, AdapterParams, build_bed_adapter_input, build_chair_adapter_input,
    build_door_adapter_input, build_table_adapter_input,
};
