pub mod defaults;
pub mod fallback;
pub mod graph;
pub mod normalize;
pub mod templates;

pub use defaults::{default_config, default_config_for};
pub use fallback::build_fallback_flow;
pub use graph::FlowGraph;
pub use normalize::{FALLBACK_NODE_TYPE, normalize};
pub use templates::{starter_template, template_flows};
