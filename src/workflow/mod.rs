pub mod ship_flow;

pub use ship_flow::ShipFlow;
