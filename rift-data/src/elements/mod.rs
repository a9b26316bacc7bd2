mod element;
mod type_chart;

pub use element::Element;
pub use type_chart::{
    TYPE_CHART,
    TypeEffectiveness,
    effectiveness,
};
