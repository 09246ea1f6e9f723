pub mod entrypoint;
pub mod model {
    pub mod internal;
}
pub mod service {
    pub mod game_manager;
    pub mod session;
}
