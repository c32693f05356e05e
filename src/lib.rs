// ============================================================================
// FLEET CONSOLE - CONSOLA DE GESTIÓN DE FLOTA (RUST + YEW)
// ============================================================================
// Arquitectura:
// - Components: pantallas Yew (sin lógica de negocio)
// - Hooks: acciones fetch + ciclo de vida de sesión
// - Services: SOLO comunicación API
// - Stores: estado por feature {data, loading, error}
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
