// AuraMind - Mental-health support chat relay
// Library exports

pub mod chat;
pub mod config;
pub mod crisis;
pub mod providers;
pub mod relay;
pub mod resources;
pub mod server;
