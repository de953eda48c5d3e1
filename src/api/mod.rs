mod axis_config;
mod axis_label_format;
mod axis_layout;
mod axis_resolver;
mod axis_ticks;
mod json_contract;
mod validation;

pub use axis_config::{
    AxisOrientation, AxisResolverDefaults, AxisSpec, ScaleKind, ScaleSpec, TickFormatFn,
    TitlePosition,
};
pub use axis_layout::{LabelPlacement, TextAnchor, TextBaseline, TickMarks, TitleAnchor};
pub use axis_resolver::{AxisConfigResolver, ResolvedAxis, ResolvedTick, resolve_axis};
pub use json_contract::{RESOLVED_AXIS_JSON_SCHEMA_V1, ResolvedAxisJsonContractV1};
