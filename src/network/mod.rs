pub mod forward;
pub mod init;
pub mod network;
pub mod topology;

pub use forward::{forward, infer, ForwardResult};
pub use init::RandomInitializer;
pub use network::NetworkParameters;
pub use topology::Topology;
