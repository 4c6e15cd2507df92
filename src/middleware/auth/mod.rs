pub mod access;
pub mod gate;
pub mod public_routes;

pub use gate::AuthGate;
pub use public_routes::PublicRoutes;
