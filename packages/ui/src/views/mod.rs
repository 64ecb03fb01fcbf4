mod board;
pub use board::BoardView;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;
