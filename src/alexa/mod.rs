//! Voice platform wire types

pub mod envelope;
pub mod response;

pub use envelope::RequestEnvelope;
pub use response::SpokenResponse;
