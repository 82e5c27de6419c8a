#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PlayState {
    Playing, // Autoplay advances slides on its interval
    Paused,  // Slides move only on explicit input
}
