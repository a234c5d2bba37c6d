mod candidate;
mod edge;
mod flow;
mod node;

pub use candidate::{CandidateEdge, CandidateFlow, CandidateNode};
pub use edge::{EdgeId, FlowEdge};
pub use flow::AgentFlow;
pub use node::{FlowNode, NodeConfig, NodeId, NodeType};
