mod ambient_flow;

pub use ambient_flow::AmbientFlow;
