/// User interface module
///
/// - Per-screen view functions (screens.rs)
/// - Weight distribution chart drawn on a canvas (chart.rs)

pub mod chart;
pub mod screens;
