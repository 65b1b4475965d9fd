pub mod configuration;
pub mod formatter;
pub mod notification;
pub mod relay;
pub mod telegram;
pub mod telemetry;
pub mod traits;
