pub mod console;
pub mod error;
pub mod model {
    pub mod game;
    pub mod messages;
}
