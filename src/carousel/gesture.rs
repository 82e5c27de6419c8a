//! Touch gesture bookkeeping: a start coordinate pair that exists only while
//! a gesture is in progress, classified into a swipe on release.

/// Coordinates captured at touch start.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub start_x: f32,
    pub start_y: f32,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Swipe {
    Next, // Finger moved left: start is right of end
    Prev, // Finger moved right
}

/// A release counts as a swipe only when the horizontal displacement both
/// dominates the vertical displacement and clears `threshold`.
pub fn classify(drag: DragState, end_x: f32, end_y: f32, threshold: f32) -> Option<Swipe> {
    let diff_x = drag.start_x - end_x;
    let diff_y = drag.start_y - end_y;

    if diff_x.abs() > diff_y.abs() && diff_x.abs() > threshold {
        if diff_x > 0.0 {
            Some(Swipe::Next)
        } else {
            Some(Swipe::Prev)
        }
    } else {
        None
    }
}
