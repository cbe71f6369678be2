use crate::stroke::Stroke;

/// Pointer lifecycle. The stroke lives inside `Drawing` and is moved out on
/// pointer-up, so no buffer outlives its cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing(Stroke),
}

/// Data-free view of [`DrawState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Idle,
    Drawing,
}

impl DrawState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Drawing(_) => Phase::Drawing,
        }
    }

    /// Replaces the state with `Idle`, returning the stroke if one was open.
    pub fn finish(&mut self) -> Option<Stroke> {
        match core::mem::take(self) {
            Self::Drawing(stroke) => Some(stroke),
            Self::Idle => None,
        }
    }
}
